use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::journal::Journal;

/// Summary of one liveness log.
#[derive(Debug, Serialize)]
pub(crate) struct LogStatus {
    pub(crate) entries: usize,
    pub(crate) last_seen: Option<String>,
}

/// Read-only snapshot of the journal for the `status` command.
#[derive(Debug, Serialize)]
pub(crate) struct StatusReport {
    pub(crate) laptop: LogStatus,
    pub(crate) server: LogStatus,
    pub(crate) marker: Option<String>,
}

pub(crate) fn collect(journal: &Journal) -> StatusReport {
    StatusReport {
        laptop: read_log(&journal.local_log_path()),
        server: read_log(&journal.remote_log_path()),
        marker: journal.read_marker().map(|s| s.trim_end().to_string()),
    }
}

fn read_log(path: &Path) -> LogStatus {
    let Ok(content) = fs::read_to_string(path) else {
        return LogStatus {
            entries: 0,
            last_seen: None,
        };
    };
    let mut entries = 0;
    let mut last_seen = None;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        entries += 1;
        last_seen = Some(line.to_string());
    }
    LogStatus { entries, last_seen }
}

pub(crate) fn print_table(report: &StatusReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Component", "Entries", "Last seen"]);
    table.add_row(status_row("laptop", &report.laptop));
    table.add_row(status_row("server", &report.server));
    println!("{table}");

    match &report.marker {
        Some(stamp) => println!("Marker: {stamp}"),
        None => println!("Marker: absent"),
    }
}

fn status_row(name: &str, log: &LogStatus) -> Vec<String> {
    vec![
        name.to_string(),
        log.entries.to_string(),
        log.last_seen.clone().unwrap_or_else(|| "never".to_string()),
    ]
}

pub(crate) fn print_json(report: &StatusReport) {
    println!("{}", serde_json::to_string_pretty(report).unwrap());
}
