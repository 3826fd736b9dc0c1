//! # jm-site
//!
//! Static export of the J&M Industry landing page.
//!
//! Renders the same component tree the browser build mounts into a complete,
//! script-free HTML document.
//!
//! ## Usage
//!
//! ```bash
//! # Write dist/index.html (settings from ./jm-site.toml when present)
//! jm-site render
//!
//! # Somewhere else, pinned footer year
//! jm-site --config deploy/jm-site.toml render --out public --year 2025
//!
//! # To stdout
//! jm-site print > index.html
//! ```

mod config;
mod export;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "jm-site")]
#[command(about = "Render the J&M Industry landing page to static HTML")]
#[command(version)]
struct Args {
    /// Config file (default: ./jm-site.toml if it exists)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the page into an output directory
    Render {
        /// Output directory (overrides [output].dir)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Footer year (overrides [site].year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Write the page to stdout
    Print {
        /// Footer year (overrides [site].year)
        #[arg(long)]
        year: Option<i32>,
    },
}

fn init_logging(level: Level) {
    // stdout is reserved for `print`
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            // RUST_LOG wins; --log-level is the fallback
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(level).into())
                .from_env_lossy(),
        )
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::load(args.config.as_deref())?;

    match args.command {
        Command::Render { out, year } => {
            let config = config.with_year(year);
            config.validate()?;

            let path = export::write_page(&config, out.as_deref())?;
            info!(path = %path.display(), "Page written");
        }
        Command::Print { year } => {
            let config = config.with_year(year);
            config.validate()?;

            let html = jm_site::render_page(&config.site);
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write page to stdout")?;
            debug!(bytes = html.len(), "Page printed");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[jm-site] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
