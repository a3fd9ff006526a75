// src/infra/paths.rs — Config path management
//
// All paths respect the KHELPERS_HOME environment variable for isolation.
// When KHELPERS_HOME is set, config lives under that directory.
// When unset, config uses ~/.khelpers/.

use std::path::PathBuf;

/// Returns the KHELPERS_HOME override, if set.
fn khelpers_home() -> Option<PathBuf> {
    std::env::var_os("KHELPERS_HOME").map(PathBuf::from)
}

/// Home directory, if the platform can tell us one.
pub fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Configuration directory: $KHELPERS_HOME/ or ~/.khelpers/
///
/// Falls back to the working directory when no home directory exists.
pub fn config_dir() -> PathBuf {
    if let Some(home) = khelpers_home() {
        return home;
    }
    dirs_home()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".khelpers")
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}
