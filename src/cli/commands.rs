use clap::Subcommand;

/// Subcommands. With none given, `check` runs.
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run one health check (default)
    Check,
    /// Summarize the liveness logs and the marker without touching anything
    Status,
}
