//! Integration tests for directory inspection against real temp trees.
//!
//! The `/usr/include` scenarios only run when that directory exists on the
//! host.

use std::fs;
use std::path::Path;

use dirstat_core::legacy::{self, SENTINEL};
use dirstat_core::{InspectConfig, InspectError, Inspector};
use tempfile::TempDir;

/// Build a tree with `dirs` subdirectories and files of the given sizes.
fn build_tree(dirs: usize, file_sizes: &[usize]) -> TempDir {
    let root = TempDir::new().unwrap();
    for i in 0..dirs {
        let d = root.path().join(format!("dir{i}"));
        fs::create_dir(&d).unwrap();
        // Grandchildren must never be counted.
        fs::create_dir(d.join("inner")).unwrap();
        fs::write(d.join("inner.dat"), vec![1u8; 77]).unwrap();
    }
    for (i, size) in file_sizes.iter().enumerate() {
        fs::write(root.path().join(format!("file{i}")), vec![0u8; *size]).unwrap();
    }
    root
}

// ── Counts and sizes ───────────────────────────────────────────────

#[test]
fn counts_match_tree_shape() {
    let insp = Inspector::default();
    let cases: &[(usize, &[usize])] = &[
        (0, &[]),
        (1, &[0]),
        (3, &[10, 20, 30]),
        (5, &[4096, 1, 0, 65_537]),
    ];

    for (dirs, sizes) in cases {
        let tree = build_tree(*dirs, sizes);
        let expected: u64 = sizes.iter().map(|s| *s as u64).sum();

        assert_eq!(insp.count_directories(tree.path()).unwrap(), *dirs as u64);
        assert_eq!(insp.total_file_size(tree.path()).unwrap(), expected);

        let summary = insp.summarize(tree.path()).unwrap();
        assert_eq!(summary.directories, *dirs as u64);
        assert_eq!(summary.files, sizes.len() as u64);
        assert_eq!(summary.total_bytes, expected);
    }
}

#[test]
fn total_equals_sum_of_file_sizes() {
    let tree = build_tree(2, &[3, 5, 8, 13]);
    let insp = Inspector::default();

    let by_entry: u64 = fs::read_dir(tree.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter_map(|p| insp.file_size(&p).ok())
        .sum();

    assert_eq!(insp.total_file_size(tree.path()).unwrap(), by_entry);
    assert_eq!(by_entry, 29);
}

#[test]
fn missing_paths_fail_everywhere() {
    let tree = build_tree(1, &[1]);
    let missing = tree.path().join("does-not-exist");
    let insp = Inspector::default();

    for result in [
        insp.count_directories(&missing),
        insp.total_file_size(&missing),
        insp.file_size(&missing),
    ] {
        let err = result.unwrap_err();
        assert!(err.is_not_found_or_wrong_kind(), "{err}");
        assert_eq!(err.path(), missing);
    }
    assert!(insp.summarize(&missing).is_err());
}

// ── Identity ───────────────────────────────────────────────────────

#[test]
fn hard_links_alias_the_same_file() {
    let tree = build_tree(0, &[12]);
    let original = tree.path().join("file0");
    let alias = tree.path().join("alias");
    fs::hard_link(&original, &alias).unwrap();
    let insp = Inspector::default();

    assert!(insp.same_file(&original, &alias));
    assert!(insp.same_file(&alias, &original));
    assert_eq!(insp.file_size(&alias).unwrap(), 12);
}

#[test]
fn same_file_is_symmetric() {
    let tree = build_tree(2, &[1, 2]);
    let p = tree.path();
    let paths = [
        p.to_path_buf(),
        p.join("dir0"),
        p.join("dir1"),
        p.join("file0"),
        p.join("file1"),
        p.join("nope"),
    ];
    let insp = Inspector::default();

    for a in &paths {
        for b in &paths {
            assert_eq!(insp.same_file(a, b), insp.same_file(b, a), "{a:?} vs {b:?}");
            if a != b {
                assert!(!insp.same_file(a, b), "{a:?} vs {b:?}");
            }
        }
        assert_eq!(insp.same_file(a, a), a.exists());
    }
}

#[test]
fn copies_are_not_the_same_file() {
    let tree = build_tree(0, &[5]);
    let copy = tree.path().join("copy");
    fs::copy(tree.path().join("file0"), &copy).unwrap();
    assert!(!Inspector::default().same_file(tree.path().join("file0"), &copy));
}

// ── Symlinks ───────────────────────────────────────────────────────

#[cfg(unix)]
#[test]
fn dangling_symlinks_are_skipped() {
    use std::os::unix::fs::symlink;

    let tree = build_tree(1, &[100]);
    symlink(tree.path().join("gone"), tree.path().join("dangling")).unwrap();
    let insp = Inspector::default();

    assert_eq!(insp.count_directories(tree.path()).unwrap(), 1);
    assert_eq!(insp.total_file_size(tree.path()).unwrap(), 100);
    let summary = insp.summarize(tree.path()).unwrap();
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.entries(), 3);

    // Without following, the link itself resolves fine as a symlink.
    let lstat = Inspector::new(InspectConfig::builder().follow_symlinks(false).build());
    let summary = lstat.summarize(tree.path()).unwrap();
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.others, 1);
}

#[cfg(unix)]
#[test]
fn symlink_to_file_is_same_file_only_when_followed() {
    use std::os::unix::fs::symlink;

    let tree = build_tree(0, &[9]);
    let target = tree.path().join("file0");
    let link = tree.path().join("link");
    symlink(&target, &link).unwrap();

    assert!(Inspector::default().same_file(&target, &link));
    let lstat = Inspector::new(InspectConfig::builder().follow_symlinks(false).build());
    assert!(!lstat.same_file(&target, &link));
}

// ── Unreadable directories ─────────────────────────────────────────

#[cfg(unix)]
#[test]
fn unlistable_directory_fails_but_still_counts_in_parent() {
    use std::os::unix::fs::PermissionsExt;

    let tree = build_tree(1, &[]);
    let locked = tree.path().join("dir0");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can list it anyway; nothing to check then.
    if fs::read_dir(&locked).is_err() {
        let insp = Inspector::default();

        assert!(matches!(
            insp.count_directories(&locked),
            Err(InspectError::PermissionDenied { .. })
        ));
        assert!(matches!(
            insp.total_file_size(&locked),
            Err(InspectError::PermissionDenied { .. })
        ));
        assert!(matches!(
            insp.summarize(&locked),
            Err(InspectError::PermissionDenied { .. })
        ));

        assert_eq!(legacy::count_directories(&locked), SENTINEL);
        assert_eq!(legacy::file_sizes(&locked), SENTINEL);

        assert_eq!(insp.count_directories(tree.path()).unwrap(), 1);
        assert_eq!(insp.summarize(tree.path()).unwrap().directories, 1);
    }

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
}

// ── Legacy sentinel API ────────────────────────────────────────────

#[test]
fn legacy_matches_typed_results() {
    let tree = build_tree(2, &[7, 7]);
    let file = tree.path().join("file0");
    let insp = Inspector::default();

    for p in [tree.path(), file.as_path(), Path::new("/definitely/not/here")] {
        assert_eq!(
            legacy::count_directories(p),
            legacy::to_sentinel(insp.count_directories(p))
        );
        assert_eq!(legacy::file_size(p), legacy::to_sentinel(insp.file_size(p)));
        assert_eq!(legacy::file_sizes(p), legacy::to_sentinel(insp.total_file_size(p)));
    }
    assert_eq!(legacy::count_directories(&file), SENTINEL);
    assert_eq!(legacy::file_sizes(tree.path()), 14);
}

// ── Host scenarios ─────────────────────────────────────────────────

#[cfg(unix)]
#[test]
fn usr_include_scenarios() {
    let dir = Path::new("/usr/include");
    let file = dir.join("stdlib.h");
    if !file.is_file() {
        return;
    }
    let insp = Inspector::default();

    assert!(insp.count_directories(dir).is_ok());
    assert!(matches!(
        insp.count_directories(&file),
        Err(InspectError::WrongKind { .. })
    ));
    assert_eq!(legacy::count_directories(&file), SENTINEL);

    assert!(insp.file_size(&file).unwrap() > 0);
    assert_eq!(legacy::file_size(dir), SENTINEL);

    assert!(insp.same_file(&file, &file));
    assert!(insp.same_file(dir, dir));
    assert!(!insp.same_file(&file, dir));
}
