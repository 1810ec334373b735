use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Directory holding the liveness logs and the marker file.
    #[serde(default)]
    pub(crate) state_dir: Option<String>,
    /// Remote marker object in the sync tool's remote:path syntax.
    #[serde(default)]
    pub(crate) remote: Option<String>,
    /// Synchronization tool binary.
    #[serde(default)]
    pub(crate) sync_bin: Option<String>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) quiet: bool,
}

impl Config {
    /// Load an explicitly named config file. Unlike the search-path
    /// lookup this surfaces errors: a user who pointed at a file wants
    /// to know it was unreadable.
    pub(crate) fn load_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| AppError::ConfigParse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Try the usual locations in order; fall back to defaults.
    pub(crate) fn load(quiet: bool) -> Self {
        for path in Self::search_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        if !quiet {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Self::default()
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/uptick/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("uptick").join("config.toml"));
        }

        // 2. Platform config dir (differs from the above on macOS/Windows)
        if let Some(config_dir) = dirs::config_dir() {
            let native = config_dir.join("uptick").join("config.toml");
            if !paths.contains(&native) {
                paths.push(native);
            }
        }

        // 3. Home directory: ~/.uptick.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".uptick.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn search_paths_are_not_empty() {
        assert!(!Config::search_paths().is_empty());
    }

    #[test]
    fn load_file_reads_toml() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            "state_dir = \"/var/lib/uptick\"\nremote = \"nxc:marker.txt\"\nquiet = true\n",
        )
        .unwrap();

        let config = Config::load_file(&path).unwrap();
        assert_eq!(config.state_dir.as_deref(), Some("/var/lib/uptick"));
        assert_eq!(config.remote.as_deref(), Some("nxc:marker.txt"));
        assert!(config.quiet);
        assert!(config.sync_bin.is_none());
    }

    #[test]
    fn load_file_missing_is_an_error() {
        let tmp = tempdir().unwrap();
        let err = Config::load_file(&tmp.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Cannot read config"));
    }

    #[test]
    fn load_file_invalid_toml_is_an_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "state_dir = [broken").unwrap();
        let err = Config::load_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Cannot parse config"));
    }
}
