//! CLI argument definitions
//!
//! Global options and the config-file merging logic.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::consts::{DEFAULT_REMOTE, DEFAULT_STATE_DIR, DEFAULT_SYNC_BIN};

use super::commands::Commands;

#[derive(Parser)]
#[command(name = "uptick")]
#[command(about = "Record local and remote liveness by round-tripping a marker file", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Config file to use instead of the default search locations
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Directory holding the liveness logs and the marker file
    #[arg(short = 'd', long, global = true, value_name = "DIR")]
    pub(crate) state_dir: Option<String>,

    /// Remote marker object, in the sync tool's remote:path syntax
    #[arg(short, long, global = true, value_name = "REMOTE")]
    pub(crate) remote: Option<String>,

    /// Synchronization tool binary
    #[arg(long, global = true, value_name = "BIN")]
    pub(crate) sync_bin: Option<String>,

    /// Timezone for the run stamp (e.g. "UTC", "Europe/Berlin"; default local)
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Output status as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Suppress config-loading chatter on stderr
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,
}

impl Cli {
    /// Merge config file values in; CLI args take precedence.
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.state_dir.is_none() {
            self.state_dir = config.state_dir.clone();
        }
        if self.remote.is_none() {
            self.remote = config.remote.clone();
        }
        if self.sync_bin.is_none() {
            self.sync_bin = config.sync_bin.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if !self.quiet && config.quiet {
            self.quiet = true;
        }
        self
    }

    pub(crate) fn state_dir(&self) -> &str {
        self.state_dir.as_deref().unwrap_or(DEFAULT_STATE_DIR)
    }

    pub(crate) fn remote(&self) -> &str {
        self.remote.as_deref().unwrap_or(DEFAULT_REMOTE)
    }

    pub(crate) fn sync_bin(&self) -> &str {
        self.sync_bin.as_deref().unwrap_or(DEFAULT_SYNC_BIN)
    }
}
