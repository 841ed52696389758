//! Folio CLI
//!
//! Local tooling for the Folio portfolio site.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use folio::cmd::{self, serve::ServeOverrides};

/// Folio - portfolio site tooling
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to server configuration file
    #[arg(short, long, default_value = "folio.toml")]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the compiled site with client-side route fallback
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory with the compiled site
        #[arg(short, long)]
        site_root: Option<PathBuf>,

        /// Path prefix the site is served under
        #[arg(short, long)]
        base_path: Option<String>,
    },

    /// Validate site.toml and local post copies
    Check {
        /// Site configuration to validate
        #[arg(long, default_value = "site.toml")]
        site: PathBuf,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    folio::init_tracing(cli.verbose);

    tracing::debug!(?cli, "CLI arguments parsed");

    match cli.command {
        Commands::Serve {
            host,
            port,
            site_root,
            base_path,
        } => {
            let overrides = ServeOverrides {
                host,
                port,
                site_root,
                base_path,
            };
            cmd::serve::run(&cli.config, overrides).await?;
        }
        Commands::Check { site, strict } => {
            cmd::check::run(&site, strict)?;
        }
    }

    Ok(())
}
