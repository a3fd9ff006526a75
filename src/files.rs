// src/files.rs — Path strings, extensions, directory listing and cleanup
//
// Extension rules follow the file's base name: "a.tar.gz" has extension
// "gz", "name." has an empty extension, "README" has none.

use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use tracing::{debug, warn};

use crate::infra::errors::HelperError;

/// Collapse every run of `/` and `\` into a single `separator`.
///
/// `None` uses the platform separator.
pub fn fix_separator(path: &str, separator: Option<char>) -> String {
    let sep = separator.unwrap_or(MAIN_SEPARATOR);
    let mut out = String::with_capacity(path.len());
    let mut in_run = false;
    for c in path.chars() {
        if c == '/' || c == '\\' {
            if !in_run {
                out.push(sep);
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Strip leading and/or trailing `/` and `\`.
pub fn trim_slashes(path: &str, left: bool, right: bool) -> &str {
    let is_slash = |c: char| c == '/' || c == '\\';
    let mut out = path;
    if left {
        out = out.trim_start_matches(is_slash);
    }
    if right {
        out = out.trim_end_matches(is_slash);
    }
    out
}

fn base_name(name: &str) -> &str {
    let trimmed = trim_slashes(name, false, true);
    match trimmed.rfind(['/', '\\']) {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    }
}

/// Text after the last dot of the base name.
pub fn extension(name: &str) -> Option<&str> {
    let base = base_name(name);
    base.rfind('.').map(|pos| &base[pos + 1..])
}

/// The name without its extension (directories are kept).
pub fn strip_extension(name: &str) -> &str {
    match extension(name) {
        Some(ext) => {
            let trimmed = trim_slashes(name, false, true);
            &trimmed[..trimmed.len() - ext.len() - 1]
        }
        None => name,
    }
}

/// Case-insensitive check against `|`-separated extensions (`"jpg|png"`).
///
/// A name without an extension only matches an empty entry (`"jpg|"`).
pub fn match_extension(name: &str, allowed: &str) -> bool {
    let ext = extension(name).unwrap_or("").to_lowercase();
    allowed.split('|').any(|a| a.to_lowercase() == ext)
}

/// Add or bump a numeric suffix: `a.txt` → `a_1.txt`, `a_1.txt` → `a_2.txt`.
pub fn increment_file_name(name: &str, delimiter: &str) -> String {
    let ext = extension(name);
    let stem = strip_extension(name);

    let bumped = match stem.rsplit_once(delimiter) {
        Some((head, tail))
            if !delimiter.is_empty()
                && !tail.is_empty()
                && tail.bytes().all(|b| b.is_ascii_digit()) =>
        {
            match tail.parse::<u64>() {
                Ok(n) => format!("{head}{delimiter}{}", n.saturating_add(1)),
                Err(_) => format!("{stem}{delimiter}1"),
            }
        }
        _ => format!("{stem}{delimiter}1"),
    };

    match ext {
        Some(ext) => format!("{bumped}.{ext}"),
        None => bumped,
    }
}

/// Entries directly inside `dir`, sorted by path.
///
/// `types` filters by extension (see [`match_extension`]); `only_files`
/// drops directories. A missing directory yields an empty list.
pub fn file_list(
    dir: &Path,
    types: Option<&str>,
    only_files: bool,
) -> Result<Vec<PathBuf>, HelperError> {
    let mut out = Vec::new();
    for path in glob_children(dir)? {
        if only_files && !path.is_file() {
            continue;
        }
        if let Some(types) = types {
            let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            if !match_extension(&name, types) {
                continue;
            }
        }
        out.push(path);
    }
    debug!(dir = %dir.display(), entries = out.len(), "listed files");
    Ok(out)
}

/// Sub-directories directly inside `dir`, sorted by path.
pub fn directory_list(dir: &Path) -> Result<Vec<PathBuf>, HelperError> {
    Ok(glob_children(dir)?
        .into_iter()
        .filter(|p| p.is_dir())
        .collect())
}

fn glob_children(dir: &Path) -> Result<Vec<PathBuf>, HelperError> {
    // An empty path is the current directory, never the filesystem root.
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{}/*", trim_slashes(&escaped, false, true));

    let mut paths = Vec::new();
    for entry in glob::glob(&pattern)? {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => warn!(error = %e, "skipping unreadable entry"),
        }
    }
    Ok(paths)
}

/// Delete every regular file in `files`; other paths are ignored.
///
/// Returns `false` if any deletion failed, after trying all of them.
pub fn delete_files<P: AsRef<Path>>(files: &[P]) -> bool {
    let mut ok = true;
    for file in files {
        let file = file.as_ref();
        if !file.is_file() {
            continue;
        }
        if let Err(e) = std::fs::remove_file(file) {
            warn!(path = %file.display(), error = %e, "failed to delete file");
            ok = false;
        }
    }
    ok
}

/// Remove everything inside `dir`, keeping `dir` itself.
pub fn clear_dir(dir: &Path) -> Result<(), HelperError> {
    for path in file_list(dir, None, false)? {
        if path.is_dir() {
            std::fs::remove_dir_all(&path)?;
        } else {
            std::fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// Remove `dir` and its contents. A missing directory is not an error.
pub fn remove_dir_recursive(dir: &Path) -> Result<(), HelperError> {
    if !dir.is_dir() {
        return Ok(());
    }
    std::fs::remove_dir_all(dir)?;
    Ok(())
}

/// Write `data` to `path` as JSON.
pub fn put_serialized<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<(), HelperError> {
    let content = serde_json::to_string(data)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Read JSON written by [`put_serialized`].
pub fn get_serialized<T: DeserializeOwned>(path: &Path) -> Result<T, HelperError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_separator() {
        assert_eq!(fix_separator("a//b\\\\c/\\d", Some('/')), "a/b/c/d");
        assert_eq!(fix_separator("a/b", Some('\\')), "a\\b");
        assert_eq!(fix_separator("plain", None), "plain");
    }

    #[test]
    fn test_trim_slashes() {
        assert_eq!(trim_slashes("/a/b/", true, true), "a/b");
        assert_eq!(trim_slashes("\\a\\", false, true), "\\a");
        assert_eq!(trim_slashes("//a", true, false), "a");
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension("photo.JPG"), Some("JPG"));
        assert_eq!(extension("archive.tar.gz"), Some("gz"));
        assert_eq!(extension("dir.v1/README"), None);
        assert_eq!(extension("name."), Some(""));
        assert_eq!(extension(".htaccess"), Some("htaccess"));
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension("dir/file.txt"), "dir/file");
        assert_eq!(strip_extension("dir.v1/README"), "dir.v1/README");
        assert_eq!(strip_extension("name."), "name");
    }

    #[test]
    fn test_match_extension() {
        assert!(match_extension("a.JPG", "jpg|png"));
        assert!(!match_extension("a.gif", "jpg|png"));
        assert!(!match_extension("README", "jpg|png"));
        assert!(match_extension("README", "jpg|"));
    }

    #[test]
    fn test_increment_file_name() {
        assert_eq!(increment_file_name("photo.jpg", "_"), "photo_1.jpg");
        assert_eq!(increment_file_name("photo_1.jpg", "_"), "photo_2.jpg");
        assert_eq!(increment_file_name("my_photo.jpg", "_"), "my_photo_1.jpg");
        assert_eq!(increment_file_name("photo_9", "_"), "photo_10");
        assert_eq!(increment_file_name("v-2.tar.gz", "-"), "v-2.tar-1.gz");
    }
}
