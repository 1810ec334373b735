use crate::journal::Journal;
use crate::sync::RemoteSync;

/// What a single health-check pass concluded.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunOutcome {
    pub(crate) reachable: bool,
}

/// The connectivity inference. The marker was deleted before the fetch
/// probe, so the only way it can exist now is that the probe wrote it.
/// The sync tool's reported exit status plays no part in this decision;
/// filesystem state is the sole signal. A tool that partially writes the
/// file and then fails still reads as reachable; accepted limitation.
pub(crate) fn remote_fetch_succeeded(journal: &Journal) -> bool {
    journal.marker_present()
}

/// One full health-check pass, strictly sequential. No step failure is
/// fatal: filesystem errors and sync-tool errors are reported to the
/// console and the pass continues. Once the success branch is entered,
/// all three of its sub-steps run regardless of each other's outcome.
///
/// `stamp` is computed once by the caller and reused for every write, so
/// the local log, the remote log, and the marker of one pass always carry
/// the same value even though wall-clock time elapses during the fetch.
pub(crate) fn run_check(
    stamp: &str,
    journal: &Journal,
    sync: &dyn RemoteSync,
    remote: &str,
) -> RunOutcome {
    // Local liveness first, so the laptop log still gains its line when
    // every remote step fails.
    if let Err(e) = journal.append_local(stamp) {
        eprintln!("Warning: {e}");
    }

    if let Err(e) = journal.reset_marker() {
        eprintln!("Warning: {e}");
    }

    let marker = journal.marker_path();
    let marker = marker.to_string_lossy();

    if let Err(e) = sync.copy(remote, &marker) {
        eprintln!("Fetch from remote failed: {e}");
    }

    if !remote_fetch_succeeded(journal) {
        return RunOutcome { reachable: false };
    }

    if let Err(e) = journal.append_remote(stamp) {
        eprintln!("Warning: {e}");
    }
    if let Err(e) = journal.refresh_marker(stamp) {
        eprintln!("Warning: {e}");
    }
    if let Err(e) = sync.copy(&marker, remote) {
        eprintln!("Push to remote failed: {e}");
    }

    RunOutcome { reachable: true }
}
