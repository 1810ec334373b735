use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::journal::Journal;
use crate::run::run_check;
use crate::status;
use crate::sync::RcloneSync;
use crate::timestamp::Timezone;

/// Dispatch the parsed command. `started` is captured at process start
/// so the final duration line covers the whole run.
pub(crate) fn run(cli: &Cli, timezone: Timezone, started: Instant) {
    let journal = Journal::new(cli.state_dir());

    match cli.command {
        Some(Commands::Status) => {
            let report = status::collect(&journal);
            if cli.json {
                status::print_json(&report);
            } else {
                status::print_table(&report);
            }
        }
        Some(Commands::Check) | None => {
            let sync = RcloneSync::new(cli.sync_bin());
            let stamp = timezone.stamp();
            let outcome = run_check(&stamp, &journal, &sync, cli.remote());
            if outcome.reachable {
                println!("Connected to remote storage.");
            } else {
                println!("Could not reach remote storage.");
            }
            println!("Check finished in {:.2}s.", started.elapsed().as_secs_f64());
        }
    }
}
