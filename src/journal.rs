use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::consts::{LOCAL_LOG_FILE, MARKER_FILE, REMOTE_LOG_FILE};
use crate::error::JournalError;

/// The three well-known files under the state directory: the two
/// append-only liveness logs and the marker file. One writer per run;
/// two overlapping runs against the same directory are not guarded.
pub(crate) struct Journal {
    dir: PathBuf,
}

impl Journal {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Journal { dir: dir.into() }
    }

    pub(crate) fn local_log_path(&self) -> PathBuf {
        self.dir.join(LOCAL_LOG_FILE)
    }

    pub(crate) fn remote_log_path(&self) -> PathBuf {
        self.dir.join(REMOTE_LOG_FILE)
    }

    pub(crate) fn marker_path(&self) -> PathBuf {
        self.dir.join(MARKER_FILE)
    }

    /// Append one stamp line to the local liveness log.
    pub(crate) fn append_local(&self, stamp: &str) -> Result<(), JournalError> {
        append_line(&self.local_log_path(), stamp)
    }

    /// Append one stamp line to the remote liveness log.
    pub(crate) fn append_remote(&self, stamp: &str) -> Result<(), JournalError> {
        append_line(&self.remote_log_path(), stamp)
    }

    /// Delete the marker if present. An already-absent marker is success:
    /// this runs before every fetch probe so a stale marker from an
    /// earlier run can never count as a fresh fetch.
    pub(crate) fn reset_marker(&self) -> Result<(), JournalError> {
        let path = self.marker_path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(JournalError::Remove {
                path: path.display().to_string(),
                source: e,
            }),
        }
    }

    /// Overwrite the marker with this run's stamp, truncating whatever
    /// the fetch brought down.
    pub(crate) fn refresh_marker(&self, stamp: &str) -> Result<(), JournalError> {
        let path = self.marker_path();
        ensure_parent(&path)?;
        fs::write(&path, format!("{stamp}\n")).map_err(|e| JournalError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }

    pub(crate) fn marker_present(&self) -> bool {
        self.marker_path().exists()
    }

    pub(crate) fn read_marker(&self) -> Option<String> {
        fs::read_to_string(self.marker_path()).ok()
    }
}

fn append_line(path: &Path, stamp: &str) -> Result<(), JournalError> {
    ensure_parent(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| JournalError::Append {
            path: path.display().to_string(),
            source: e,
        })?;
    file.write_all(stamp.as_bytes())
        .and_then(|()| file.write_all(b"\n"))
        .map_err(|e| JournalError::Append {
            path: path.display().to_string(),
            source: e,
        })
    // The handle drops here, so the line is flushed and closed before the
    // caller moves on to the next step.
}

fn ensure_parent(path: &Path) -> Result<(), JournalError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| JournalError::CreateDir {
            path: parent.display().to_string(),
            source: e,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn append_local_creates_dir_and_appends_in_order() {
        let tmp = tempdir().unwrap();
        let journal = Journal::new(tmp.path().join("state"));

        journal.append_local("2026-08-06T09:00:00+0000").unwrap();
        journal.append_local("2026-08-06T09:05:00+0000").unwrap();

        let content = fs::read_to_string(journal.local_log_path()).unwrap();
        assert_eq!(
            content,
            "2026-08-06T09:00:00+0000\n2026-08-06T09:05:00+0000\n"
        );
    }

    #[test]
    fn append_preserves_prior_content() {
        let tmp = tempdir().unwrap();
        let journal = Journal::new(tmp.path());
        fs::write(journal.remote_log_path(), "old-line\n").unwrap();

        journal.append_remote("new-line").unwrap();

        let content = fs::read_to_string(journal.remote_log_path()).unwrap();
        assert_eq!(content, "old-line\nnew-line\n");
    }

    #[test]
    fn reset_marker_is_idempotent_when_absent() {
        let tmp = tempdir().unwrap();
        let journal = Journal::new(tmp.path());
        assert!(!journal.marker_present());
        journal.reset_marker().unwrap();
        journal.reset_marker().unwrap();
    }

    #[test]
    fn reset_marker_removes_existing_file() {
        let tmp = tempdir().unwrap();
        let journal = Journal::new(tmp.path());
        fs::write(journal.marker_path(), "stale\n").unwrap();
        assert!(journal.marker_present());

        journal.reset_marker().unwrap();
        assert!(!journal.marker_present());
    }

    #[test]
    fn refresh_marker_overwrites_not_appends() {
        let tmp = tempdir().unwrap();
        let journal = Journal::new(tmp.path());
        fs::write(journal.marker_path(), "whatever the fetch brought\n").unwrap();

        journal.refresh_marker("2026-08-06T09:00:00+0000").unwrap();

        assert_eq!(
            journal.read_marker().unwrap(),
            "2026-08-06T09:00:00+0000\n"
        );
    }

    #[test]
    fn read_marker_absent_is_none() {
        let tmp = tempdir().unwrap();
        let journal = Journal::new(tmp.path());
        assert!(journal.read_marker().is_none());
    }
}
