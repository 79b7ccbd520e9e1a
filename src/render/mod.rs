//! View rendering seam.
//!
//! # Data Flow
//! ```text
//! LayoutConfig (root layout, static slots, main slot)
//!     → default_action(route name)
//!     → Action::Render { layout, slots + main=name }
//!     → router navigates → Action::invoke(renderer)
//!     → ViewRenderer::render(layout, slots)
//! ```
//!
//! # Design Decisions
//! - The renderer is passed at invocation time; actions hold no renderer
//! - Slot maps are ordered so rendered output is stable
//! - Later slot maps win when merging (main slot overrides static ones)

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::config::schema::LayoutConfig;

/// Slot name → view name.
pub type SlotMap = IndexMap<String, String>;

/// External view renderer.
pub trait ViewRenderer {
    /// Display `slots` inside the `layout` root.
    fn render(&self, layout: &str, slots: &SlotMap);
}

type Callback = Arc<dyn Fn(&dyn ViewRenderer) + Send + Sync>;

/// What a route does when the router enters it.
#[derive(Clone)]
pub enum Action {
    /// Render the given slots into a root layout.
    Render { layout: String, slots: SlotMap },
    /// Caller-supplied behavior.
    Callback(Callback),
}

impl Action {
    /// Wrap a closure as an action.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&dyn ViewRenderer) + Send + Sync + 'static,
    {
        Action::Callback(Arc::new(f))
    }

    /// Run the action against a renderer.
    pub fn invoke(&self, renderer: &dyn ViewRenderer) {
        match self {
            Action::Render { layout, slots } => renderer.render(layout, slots),
            Action::Callback(f) => f(renderer),
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Render { layout, slots } => f
                .debug_struct("Render")
                .field("layout", layout)
                .field("slots", slots)
                .finish(),
            Action::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Render { layout, slots } => {
                write!(f, "render {} [", layout)?;
                for (i, (slot, view)) in slots.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", slot, view)?;
                }
                write!(f, "]")
            }
            Action::Callback(_) => write!(f, "callback"),
        }
    }
}

/// Merge slot maps left to right; later maps override earlier ones.
pub fn merge_slots<'a>(maps: impl IntoIterator<Item = &'a SlotMap>) -> SlotMap {
    let mut merged = SlotMap::new();
    for map in maps {
        for (slot, view) in map {
            merged.insert(slot.clone(), view.clone());
        }
    }
    merged
}

/// Static slots plus `main_slot = view`.
pub fn default_slots(layout: &LayoutConfig, view: &str) -> SlotMap {
    let main: SlotMap = [(layout.main_slot.clone(), view.to_string())].into_iter().collect();
    merge_slots([&layout.slots, &main])
}

/// Action rendering `view` into the default layout.
pub fn default_action(layout: &LayoutConfig, view: &str) -> Action {
    Action::Render {
        layout: layout.root.clone(),
        slots: default_slots(layout, view),
    }
}

/// Action rendering the configured not-found view.
pub fn not_found_action(layout: &LayoutConfig) -> Action {
    default_action(layout, &layout.not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(String, SlotMap)>>,
    }

    impl ViewRenderer for Recorder {
        fn render(&self, layout: &str, slots: &SlotMap) {
            self.calls.lock().unwrap().push((layout.to_string(), slots.clone()));
        }
    }

    #[test]
    fn test_default_action_renders_main_view() {
        let layout = LayoutConfig::default();
        let recorder = Recorder::default();

        default_action(&layout, "home").invoke(&recorder);

        let calls = recorder.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "App_Body");
        assert_eq!(calls[0].1.get("nav").map(String::as_str), Some("Header"));
        assert_eq!(calls[0].1.get("footer").map(String::as_str), Some("Footer"));
        assert_eq!(calls[0].1.get("main").map(String::as_str), Some("home"));
    }

    #[test]
    fn test_main_slot_overrides_static_slot() {
        let mut layout = LayoutConfig::default();
        layout.main_slot = "nav".to_string();
        let slots = default_slots(&layout, "Menu");
        assert_eq!(slots.get("nav").map(String::as_str), Some("Menu"));
        assert_eq!(slots.len(), 2);
    }

    #[test]
    fn test_not_found_action() {
        let layout = LayoutConfig::default();
        let action = not_found_action(&layout);
        assert_eq!(
            action.to_string(),
            "render App_Body [nav=Header, footer=Footer, main=App_Not_Found]"
        );
    }

    #[test]
    fn test_callback_action() {
        let recorder = Recorder::default();
        let action = Action::callback(|r| r.render("Custom", &SlotMap::new()));
        action.invoke(&recorder);
        assert_eq!(recorder.calls.lock().unwrap()[0].0, "Custom");
        assert_eq!(format!("{:?}", action), "Callback(..)");
    }
}
