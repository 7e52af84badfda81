use std::fs;
use std::path::Path;

use divsort::{sort, FileSorter};
use tempfile::TempDir;

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn test_sort_groups_by_extension() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write(&source.path().join("a.txt"), "alpha");
    write(&source.path().join("b.txt"), "beta");
    write(&source.path().join("c"), "gamma");

    sort(source.path(), target.path());

    assert_eq!(fs::read_to_string(target.path().join("txt/a.txt")).unwrap(), "alpha");
    assert_eq!(fs::read_to_string(target.path().join("txt/b.txt")).unwrap(), "beta");
    assert_eq!(fs::read_to_string(target.path().join("c")).unwrap(), "gamma");

    // Copied, not moved.
    assert!(source.path().join("a.txt").exists());
    assert!(source.path().join("b.txt").exists());
    assert!(source.path().join("c").exists());
}

#[test]
fn test_sort_recurses_into_subdirectories() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write(&source.path().join("nested/deeper/photo.jpg"), "jpg");
    write(&source.path().join("nested/notes.md"), "md");

    let summary = FileSorter::new(source.path(), target.path())
        .sort_files()
        .unwrap();

    assert_eq!(summary.files_copied, 2);
    assert_eq!(summary.groups.get("jpg"), Some(&1));
    assert_eq!(summary.groups.get("md"), Some(&1));
    assert!(target.path().join("jpg/photo.jpg").is_file());
    assert!(target.path().join("md/notes.md").is_file());
    assert!(!target.path().join("nested").exists());
}

#[test]
fn test_sort_overwrites_on_collision() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write(&source.path().join("report.csv"), "fresh");
    write(&target.path().join("csv/report.csv"), "stale");

    sort(source.path(), target.path());

    assert_eq!(
        fs::read_to_string(target.path().join("csv/report.csv")).unwrap(),
        "fresh"
    );
}

#[test]
fn test_sort_with_missing_target_has_no_effect() {
    let source = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    let missing = scratch.path().join("missing");
    write(&source.path().join("a.txt"), "alpha");

    sort(source.path(), &missing);

    assert!(!missing.exists());
    assert!(source.path().join("a.txt").exists());
}

#[test]
fn test_sort_empty_source() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    let summary = FileSorter::new(source.path(), target.path())
        .sort_files()
        .unwrap();

    assert_eq!(summary.files_copied, 0);
    assert!(summary.groups.is_empty());
    assert_eq!(fs::read_dir(target.path()).unwrap().count(), 0);
}

#[test]
fn test_sort_into_itself_keeps_contents() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("c"), "gamma");
    write(&dir.path().join("txt/a.txt"), "alpha");
    write(&dir.path().join("b.md"), "beta");

    let summary = FileSorter::new(dir.path(), dir.path()).sort_files().unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("c")).unwrap(), "gamma");
    assert_eq!(fs::read_to_string(dir.path().join("txt/a.txt")).unwrap(), "alpha");
    assert_eq!(fs::read_to_string(dir.path().join("md/b.md")).unwrap(), "beta");
    assert_eq!(fs::read_to_string(dir.path().join("b.md")).unwrap(), "beta");
    assert_eq!(summary.files_skipped, 2);
    assert_eq!(summary.files_copied, 1);
}

#[test]
fn test_sort_into_nested_target_twice() {
    let source = TempDir::new().unwrap();
    let target = source.path().join("sorted");
    fs::create_dir(&target).unwrap();
    write(&source.path().join("a.txt"), "alpha");
    write(&source.path().join("c"), "gamma");

    sort(source.path(), &target);
    let second = FileSorter::new(source.path(), &target).sort_files().unwrap();

    // Earlier output under the target is not walked again.
    assert_eq!(second.files_copied, 2);
    assert_eq!(second.files_skipped, 0);
    assert_eq!(fs::read_to_string(target.join("txt/a.txt")).unwrap(), "alpha");
    assert_eq!(fs::read_to_string(target.join("c")).unwrap(), "gamma");
    assert!(!target.join("txt/txt").exists());
}
