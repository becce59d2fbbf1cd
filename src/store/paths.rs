// Storage path utilities.
// Resolves per-user data and cache locations.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "cuppa")
}

/// Base data directory (~/.local/share/cuppa on Linux).
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Base cache directory (~/.cache/cuppa on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the saved cafes file.
pub fn favorites_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("favorites.json"))
}

/// Path to the log file.
pub fn log_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("cuppa.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        // Only checks construction; nothing touches the filesystem.
        if let Some(path) = favorites_path() {
            assert!(path.ends_with("favorites.json"));
        }
        if let Some(path) = log_path() {
            assert!(path.ends_with("cuppa.log"));
        }
    }
}
