// Session storage path utilities.
// Resolves where per-session state files live on disk.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Default session directory.
/// Prefers the per-user runtime directory, which the OS clears when the session ends,
/// and falls back to the cache directory on platforms without one.
/// The fallback (macOS, Windows) is not cleared at session end, so a stored login
/// flag there persists until it is overwritten or removed.
pub fn session_dir() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "employee-store")?;
    let dir = dirs
        .runtime_dir()
        .map(|dir| dir.to_path_buf())
        .unwrap_or_else(|| dirs.cache_dir().join("session"));
    Some(dir)
}

/// Path of the file backing one storage key.
pub fn key_path(dir: &std::path::Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", sanitize_key(key)))
}

/// Sanitize a key for use as a file name.
/// Replaces problematic characters with underscores.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '.' => '_',
            _ => c,
        })
        .collect()
}
