mod app;
mod cli;
mod config;
mod consts;
mod error;
mod journal;
mod run;
mod status;
mod sync;
mod timestamp;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use config::Config;
use timestamp::Timezone;

fn main() -> ExitCode {
    let started = Instant::now();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Config::load(cli.quiet || cli.json),
    };
    let cli = cli.with_config(&config);

    let timezone = match Timezone::parse(cli.timezone.as_deref()) {
        Ok(tz) => tz,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // From here on nothing is fatal: a check always reaches its duration
    // report and exits 0, reachable or not.
    app::run(&cli, timezone, started);
    ExitCode::SUCCESS
}
