// SPDX-FileCopyrightText: 2026 Lani Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lani - hybrid query router.
//!
//! Thin CLI front-end over the routing library. Routes a query and prints
//! the decision with its signal breakdown; never executes a model call.

use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lani_core::Route;
use lani_router::QueryRouter;

/// Lani - hybrid query router.
#[derive(Parser, Debug)]
#[command(name = "lani", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a query and print the routing decision.
    Route {
        /// The query text to route.
        query: String,
        /// Force the routing target, bypassing the threshold (local|cloud).
        #[arg(long)]
        backend: Option<String>,
    },
    /// Load, validate, and print the effective configuration.
    Config,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load and validate configuration at startup; routing never revalidates.
    let config = match lani_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            lani_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Route { query, backend } => {
            let forced = match backend.as_deref() {
                Some(raw) => match Route::from_str(raw) {
                    Ok(route) => Some(route),
                    Err(_) => {
                        eprintln!("lani: unknown backend `{raw}` (expected `local` or `cloud`)");
                        std::process::exit(2);
                    }
                },
                None => None,
            };

            let router = QueryRouter::new(config.routing);
            let decision = router.route_with_override(&query, forced);

            println!("query:     {}", decision.query);
            println!(
                "score:     {:.2} (threshold {:.2})",
                decision.score, decision.threshold
            );
            println!("route:     {} ({})", decision.route, decision.backend_id);
            println!("mode:      {}", decision.mode);
            if decision.signals.is_empty() {
                println!("signals:   none");
            } else {
                println!("signals:");
                for signal in &decision.signals {
                    println!(
                        "  +{:<5.2} {:<9} {}",
                        signal.weight, signal.kind, signal.detail
                    );
                }
            }
        }
        Commands::Config => match toml::to_string_pretty(&config) {
            Ok(rendered) => print!("{rendered}"),
            Err(err) => {
                eprintln!("lani: failed to render configuration: {err}");
                std::process::exit(1);
            }
        },
    }
}
