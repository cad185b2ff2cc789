//! `apiurl`: prints the base URL the frontend would talk to, and the request
//! URLs built on top of it, using the same environment and `.env` files.

mod cli;

use std::io;

use anyhow::Context;
use api_url::{config, ApiRoutes, Route, RouteArea};
use clap::Parser;
use cli::{Args, Command};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct RouteEntry {
    name: String,
    method: String,
    area: RouteArea,
    multipart: bool,
    url: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match &args.env_file {
        Some(path) => {
            let loaded = config::load_env_file(path)?;
            info!(path = %loaded.display(), "loaded env file");
        }
        None => {
            config::load_dotenv();
        }
    }

    let routes = ApiRoutes::from_env();
    debug!(base = %routes.base(), default = routes.base().is_default(), "resolved base URL");

    match args.command {
        Command::Base => println!("{}", routes.base()),
        Command::Build { endpoints } => {
            for endpoint in &endpoints {
                println!("{}", routes.url(endpoint));
            }
        }
        Command::Routes { json } => {
            let entries: Vec<RouteEntry> = Route::ALL
                .into_iter()
                .map(|route| RouteEntry {
                    name: route.name(),
                    method: route.method().to_string(),
                    area: route.area(),
                    multipart: route.is_multipart(),
                    url: routes.route_url(route),
                })
                .collect();
            if json {
                let out = serde_json::to_string_pretty(&entries)
                    .context("failed to serialize routes")?;
                println!("{out}");
            } else {
                for entry in &entries {
                    let body = if entry.multipart { " (multipart)" } else { "" };
                    println!("{:<6} {} {}{body}", entry.method, entry.url, entry.name);
                }
            }
        }
        Command::Route { name } => {
            let route: Route = name.parse()?;
            println!("{}", routes.route_url(route));
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);
    tracing_subscriber::registry().with(filter).with(layer).init();
}
