use std::process::{Command, ExitStatus, Stdio};

use crate::error::SyncError;

/// One-way copy through the external synchronization tool. The
/// destination is always overwritten. Source and destination are
/// whatever the tool understands: local paths or `remote:path` specs,
/// in either direction.
pub(crate) trait RemoteSync {
    fn copy(&self, source: &str, dest: &str) -> Result<(), SyncError>;
}

/// Production backend: `rclone copyto SOURCE DEST`, run synchronously.
/// Credentials live entirely in rclone's own config. There is no timeout;
/// a hang in the tool hangs the run.
pub(crate) struct RcloneSync {
    bin: String,
}

impl RcloneSync {
    pub(crate) fn new(bin: impl Into<String>) -> Self {
        RcloneSync { bin: bin.into() }
    }
}

impl RemoteSync for RcloneSync {
    fn copy(&self, source: &str, dest: &str) -> Result<(), SyncError> {
        let child = Command::new(&self.bin)
            .arg("copyto")
            .arg(source)
            .arg(dest)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SyncError::NotFound {
                        bin: self.bin.clone(),
                    }
                } else {
                    SyncError::Spawn {
                        bin: self.bin.clone(),
                        source: e,
                    }
                }
            })?;

        let output = child.wait_with_output().map_err(|e| SyncError::Wait {
            bin: self.bin.clone(),
            source: e,
        })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(SyncError::Failed {
                bin: self.bin.clone(),
                detail: failure_detail(output.status, &stderr),
            })
        }
    }
}

/// rclone is chatty on stderr; keep the last non-empty line, which is
/// where it puts the actual failure summary.
fn failure_detail(status: ExitStatus, stderr: &str) -> String {
    match stderr.lines().rev().find(|l| !l.trim().is_empty()) {
        Some(line) => line.trim().to_string(),
        None => status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_maps_to_not_found() {
        let sync = RcloneSync::new("uptick-test-no-such-binary");
        let err = sync.copy("a", "b").unwrap_err();
        assert!(matches!(err, SyncError::NotFound { .. }), "{err:?}");
        assert!(err.to_string().contains("uptick-test-no-such-binary"));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_maps_to_failed() {
        // `false` ignores its arguments and exits 1 with empty stderr.
        let sync = RcloneSync::new("false");
        let err = sync.copy("a", "b").unwrap_err();
        match err {
            SyncError::Failed { bin, detail } => {
                assert_eq!(bin, "false");
                assert!(detail.contains("exit status"), "{detail}");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn failure_detail_prefers_last_stderr_line() {
        let status = exit_status_failure();
        let detail = failure_detail(status, "INFO: starting\nERROR: couldn't connect\n");
        assert_eq!(detail, "ERROR: couldn't connect");
    }

    #[test]
    fn failure_detail_falls_back_to_status() {
        let status = exit_status_failure();
        let detail = failure_detail(status, "   \n");
        assert!(detail.contains("exit"), "{detail}");
    }

    #[cfg(unix)]
    fn exit_status_failure() -> ExitStatus {
        Command::new("false").status().unwrap()
    }

    #[cfg(not(unix))]
    fn exit_status_failure() -> ExitStatus {
        Command::new("cmd").args(["/C", "exit 1"]).status().unwrap()
    }
}
