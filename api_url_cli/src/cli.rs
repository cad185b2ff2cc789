use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "apiurl",
    version,
    about = "Resolve the backend API base URL and build request URLs"
)]
pub(crate) struct Args {
    /// Load variables from this file instead of a `.env` in the working directory.
    #[arg(long, short = 'e', global = true)]
    pub(crate) env_file: Option<PathBuf>,
    #[arg(long, short = 'v', global = true)]
    pub(crate) verbose: bool,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Print the resolved base URL.
    Base,
    /// Print the request URL for each endpoint.
    Build {
        #[arg(required = true)]
        endpoints: Vec<String>,
    },
    /// List the known backend routes.
    Routes {
        #[arg(long)]
        json: bool,
    },
    /// Print the URL of one named route, e.g. `auth-login`.
    Route { name: String },
}
