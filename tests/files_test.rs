// tests/files_test.rs — Integration test: directory listing, cleanup and persistence

use khelpers::files::{
    clear_dir, delete_files, directory_list, file_list, get_serialized, put_serialized,
    remove_dir_recursive,
};
use khelpers::Record;
use serde_json::json;
use tempfile::TempDir;

/// Temp dir with a.txt, b.JPG, c.png, notes (no extension) and sub/inner.txt.
fn sample_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in ["a.txt", "b.JPG", "c.png", "notes"] {
        std::fs::write(dir.path().join(name), name).unwrap();
    }
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("sub").join("inner.txt"), "x").unwrap();
    dir
}

fn names(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_file_list_only_files_sorted() {
    let dir = sample_dir();
    let files = file_list(dir.path(), None, true).unwrap();
    assert_eq!(names(&files), vec!["a.txt", "b.JPG", "c.png", "notes"]);
}

#[test]
fn test_file_list_with_directories() {
    let dir = sample_dir();
    let all = file_list(dir.path(), None, false).unwrap();
    assert_eq!(names(&all), vec!["a.txt", "b.JPG", "c.png", "notes", "sub"]);
}

#[test]
fn test_file_list_by_type_is_case_insensitive() {
    let dir = sample_dir();
    let images = file_list(dir.path(), Some("jpg|png"), true).unwrap();
    assert_eq!(names(&images), vec!["b.JPG", "c.png"]);
}

#[test]
fn test_file_list_missing_dir_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(file_list(&missing, None, true).unwrap().is_empty());
}

#[test]
fn test_file_list_dir_with_glob_characters() {
    let dir = tempfile::tempdir().unwrap();
    let odd = dir.path().join("odd[1]");
    std::fs::create_dir(&odd).unwrap();
    std::fs::write(odd.join("x.txt"), "").unwrap();
    assert_eq!(names(&file_list(&odd, None, true).unwrap()), vec!["x.txt"]);
}

#[test]
fn test_file_list_empty_path_is_current_dir() {
    // Tests run from the package root.
    let entries = file_list(std::path::Path::new(""), None, false).unwrap();
    assert!(entries.iter().all(|p| !p.is_absolute()));
    assert!(names(&entries).contains(&"Cargo.toml".to_string()));
    assert!(directory_list(std::path::Path::new(""))
        .unwrap()
        .iter()
        .all(|p| !p.starts_with("/")));
}

#[test]
fn test_directory_list() {
    let dir = sample_dir();
    assert_eq!(names(&directory_list(dir.path()).unwrap()), vec!["sub"]);
}

#[test]
fn test_delete_files_skips_directories() {
    let dir = sample_dir();
    let targets = vec![
        dir.path().join("a.txt"),
        dir.path().join("sub"),
        dir.path().join("never-existed"),
    ];
    assert!(delete_files(&targets));
    assert!(!dir.path().join("a.txt").exists());
    assert!(dir.path().join("sub").exists());
}

#[test]
fn test_clear_dir_keeps_root() {
    let dir = sample_dir();
    clear_dir(dir.path()).unwrap();
    assert!(dir.path().exists());
    assert!(file_list(dir.path(), None, false).unwrap().is_empty());
}

#[test]
fn test_remove_dir_recursive() {
    let dir = sample_dir();
    let sub = dir.path().join("sub");
    remove_dir_recursive(&sub).unwrap();
    assert!(!sub.exists());
    // Second call on a missing directory is fine.
    remove_dir_recursive(&sub).unwrap();
}

#[test]
fn test_serialized_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    let data: Record = serde_json::from_value(json!({"b": [1, 2], "a": {"nested": true}})).unwrap();

    put_serialized(&path, &data).unwrap();
    let back: Record = get_serialized(&path).unwrap();
    assert_eq!(back, data);
    let keys: Vec<&str> = back.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["b", "a"]);
}

#[test]
fn test_get_serialized_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    assert!(get_serialized::<Record>(&path).is_err());

    std::fs::write(&path, "not json").unwrap();
    assert!(get_serialized::<Record>(&path).is_err());
}
