//! Argument parsing, logging setup, and session launch.

use crate::constants;
use crate::core::config;
use crate::core::credstore::CredentialStore;
use crate::core::paths::{ConfigLocation, GatePaths};
use crate::session::SessionController;
use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub mod terminal;

#[derive(Parser, Debug)]
#[command(name = "passgate", version, about = "Single-user password gate")]
pub struct Cli {
    /// Credential record to use
    #[arg(long, value_name = "PATH", env = constants::STORE_ENV)]
    pub store: Option<PathBuf>,

    /// Config file (default: ./passgate.toml when present)
    #[arg(long, value_name = "PATH", env = constants::CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_logging(self.verbose);

        let location = ConfigLocation::resolve(self.config);
        if location.explicit && !location.path.is_file() {
            bail!("config file not found: {}", location.path.display());
        }
        let config = config::load(&location.path)?;
        let paths = GatePaths::resolve(self.store, &config);
        tracing::debug!(%paths, config = %location.path.display(), "resolved paths");

        let mut terminal = terminal::ConsoleTerminal::new(config.prompt.mask_input);
        let mut session = SessionController::new(CredentialStore::new(paths.store));
        session.run(&mut terminal)
    }
}

/// Install the stderr tracing subscriber. `RUST_LOG` wins over `verbose`.
///
/// Returns false when a global subscriber was already installed; that one
/// stays in place.
pub fn init_logging(verbose: bool) -> bool {
    let default = if verbose {
        constants::VERBOSE_LOG_FILTER
    } else {
        constants::DEFAULT_LOG_FILTER
    };
    match tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(error = %err, "keeping existing tracing subscriber");
            false
        }
    }
}
