/// Stamp format used for every log line and the marker: "2026-08-06T09:15:02+0200".
/// Fixed width, so lines within one log sort lexicographically in time order.
pub(crate) const STAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Local-machine liveness log, one line per run.
pub(crate) const LOCAL_LOG_FILE: &str = "laptop_uptime_log.txt";

/// Remote liveness log, one line per run that reached the remote.
pub(crate) const REMOTE_LOG_FILE: &str = "server_uptime_log.txt";

/// The marker file whose presence after a fetch proves remote contact.
pub(crate) const MARKER_FILE: &str = "latest_uptime.txt";

pub(crate) const DEFAULT_STATE_DIR: &str = "local_uptime_folder";
pub(crate) const DEFAULT_REMOTE: &str = "nxc_admin:server_uptime_folder/latest_uptime.txt";
pub(crate) const DEFAULT_SYNC_BIN: &str = "rclone";
