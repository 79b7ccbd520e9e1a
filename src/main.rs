//! route-mapper CLI
//!
//! Loads a route configuration, runs it through the pipeline onto the
//! in-memory router and reports the result.
//!
//! ```text
//!   config.toml ──┐
//!                 ├─▶ merge ─▶ route map ─▶ groups ─▶ guards ─▶ InMemoryRouter
//!   --source ... ─┘                │
//!                                  └─▶ anomalies (check)
//!
//!   plan      print groups, routes and guards (text or JSON)
//!   check     print anomalies, fail if there are any
//!   simulate  navigate to a path as a given user
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use route_mapper::config::{load_config, load_routes, MapperConfig};
use route_mapper::observability::init_logging;
use route_mapper::render::{not_found_action, SlotMap, ViewRenderer};
use route_mapper::routing::{InMemoryRouter, Navigation, RouteTable};
use route_mapper::security::session::{RoleTable, StaticSession};
use route_mapper::security::{AccessControl, IdentityProvider};
use route_mapper::Startup;

#[derive(Parser)]
#[command(name = "route-mapper")]
#[command(about = "Build grouped, guarded router registrations from route descriptors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the groups and routes that would be registered
    Plan {
        #[arg(short, long)]
        config: PathBuf,
        /// Extra route files merged after the config routes
        #[arg(short, long)]
        source: Vec<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Report configuration anomalies
    Check {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        source: Vec<PathBuf>,
    },
    /// Navigate to a path and print the outcome
    Simulate {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        source: Vec<PathBuf>,
        #[arg(short, long)]
        path: String,
        /// Signed-in user
        #[arg(short, long)]
        user: Option<String>,
        /// Roles granted to the user
        #[arg(short, long)]
        role: Vec<String>,
        #[arg(long)]
        logging_in: bool,
    },
}

struct PrintRenderer;

impl ViewRenderer for PrintRenderer {
    fn render(&self, layout: &str, slots: &SlotMap) {
        println!("render {}", layout);
        for (slot, view) in slots {
            println!("  {} = {}", slot, view);
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "route-mapper failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> route_mapper::Result<ExitCode> {
    match cli.command {
        Commands::Plan { config, source, json } => {
            let config = load(&config)?;
            let access = access_for(&config, Arc::new(StaticSession::anonymous()), RoleTable::new());
            let mut router = InMemoryRouter::new();
            let (table, _) = startup(&config, &source)?.run(&access, &mut router)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&plan_json(&table, &router)).unwrap_or_default());
            } else {
                print_plan(&table, &router);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { config, source } => {
            let config = load(&config)?;
            let access = access_for(&config, Arc::new(StaticSession::anonymous()), RoleTable::new());
            let table = startup(&config, &source)?.build(&access)?;

            if table.anomalies().is_empty() {
                println!("ok: {} routes in {} groups", table.route_map.len(), table.routes_by_group.len());
                return Ok(ExitCode::SUCCESS);
            }
            for anomaly in table.anomalies() {
                println!("{}", anomaly);
            }
            Ok(ExitCode::FAILURE)
        }
        Commands::Simulate {
            config,
            source,
            path,
            user,
            role,
            logging_in,
        } => {
            let config = load(&config)?;
            let session = match (&user, logging_in) {
                (_, true) => StaticSession::logging_in(),
                (Some(u), false) => StaticSession::user(u.as_str()),
                (None, false) => StaticSession::anonymous(),
            };
            let roles = match &user {
                Some(u) => role.iter().fold(RoleTable::new(), |t, r| t.grant(u.as_str(), r.as_str())),
                None => RoleTable::new(),
            };
            let access = access_for(&config, Arc::new(session), roles);
            let mut router = InMemoryRouter::new();
            startup(&config, &source)?.run(&access, &mut router)?;

            match router.enter(&path, &PrintRenderer) {
                Navigation::Entered { route } => {
                    println!("entered {}", route);
                    Ok(ExitCode::SUCCESS)
                }
                Navigation::Redirected { route, to } => {
                    println!("{} redirected to {}", route, to);
                    Ok(ExitCode::SUCCESS)
                }
                Navigation::NotFound => {
                    println!("no route at {}", path);
                    not_found_action(&config.layout).invoke(&PrintRenderer);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

fn load(path: &Path) -> route_mapper::Result<MapperConfig> {
    let config = load_config(path)?;
    init_logging(&config.observability);
    tracing::debug!(path = %path.display(), routes = config.routes.len(), "Configuration loaded");
    Ok(config)
}

fn startup<'a>(config: &'a MapperConfig, sources: &[PathBuf]) -> route_mapper::Result<Startup<'a>> {
    let mut startup = Startup::new(config);
    for path in sources {
        startup = startup.with_source(load_routes(path)?);
    }
    Ok(startup)
}

fn access_for(config: &MapperConfig, identity: Arc<dyn IdentityProvider>, roles: RoleTable) -> AccessControl {
    AccessControl::new(identity, Arc::new(roles), &config.access)
}

fn print_plan(table: &RouteTable, router: &InMemoryRouter) {
    for (id, group) in router.groups().iter().enumerate() {
        println!("group {} (prefix {})", group.name, group.prefix);
        for route in router.routes().iter().filter(|r| r.group.0 == id) {
            let guards: Vec<String> = route.options.triggers_enter.iter().map(|t| t.kind().to_string()).collect();
            println!(
                "  {:<24} {:<20} {}{}",
                route.path,
                route.options.name,
                route.options.action,
                if guards.is_empty() {
                    String::new()
                } else {
                    format!(" guards=[{}]", guards.join(", "))
                }
            );
        }
    }
    for anomaly in table.anomalies() {
        println!("warning: {}", anomaly);
    }
}

fn plan_json(table: &RouteTable, router: &InMemoryRouter) -> Value {
    let groups: Vec<Value> = router
        .groups()
        .iter()
        .enumerate()
        .map(|(id, group)| {
            let routes: Vec<Value> = router
                .routes()
                .iter()
                .filter(|r| r.group.0 == id)
                .map(|r| {
                    json!({
                        "path": r.path,
                        "name": r.options.name,
                        "primary_group": r.options.primary_group,
                        "groups": r.options.groups,
                        "action": r.options.action.to_string(),
                        "triggers_enter": r.options.triggers_enter.iter().map(|t| t.kind().to_string()).collect::<Vec<_>>(),
                        "extra": r.options.extra,
                    })
                })
                .collect();
            json!({ "group": group.name, "prefix": group.prefix, "routes": routes })
        })
        .collect();

    json!({
        "groups": groups,
        "anomalies": table.anomalies().iter().map(ToString::to_string).collect::<Vec<_>>(),
    })
}
