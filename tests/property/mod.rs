//! Property-based testing for treecmp
//!
//! Uses proptest to check the relative-addressing round trip and that every
//! examined file is counted exactly once.

use ::treecmp::resolver::{corresponding_path, relative_suffix};
use ::treecmp::*;
use proptest::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// How a generated source file relates to the target tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Identical,
    Altered,
    Absent,
    Unreadable,
    Unopenable,
}

fn placement_strategy() -> impl Strategy<Value = Placement> {
    prop_oneof![
        Just(Placement::Identical),
        Just(Placement::Altered),
        Just(Placement::Absent),
        Just(Placement::Unreadable),
        Just(Placement::Unopenable),
    ]
}

/// Generate random relative file paths (0-3 directories deep)
///
/// Directory names carry a `d_` prefix so they never collide with file names.
fn relative_path_strategy() -> impl Strategy<Value = PathBuf> {
    (
        prop::collection::vec("[a-z]{1,8}", 0..=3),
        "[a-z]{1,8}\\.(txt|bin|dat)",
    )
        .prop_map(|(dirs, file)| {
            let mut path: PathBuf = dirs.iter().map(|d| format!("d_{d}")).collect();
            path.push(file);
            path
        })
}

fn content_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_resolution_round_trips(
        relative in relative_path_strategy(),
        source_root in "/[a-z]{1,6}/src",
        target_root in "/[a-z]{1,6}/dst",
    ) {
        let source_root = PathBuf::from(source_root);
        let target_root = PathBuf::from(target_root);
        let file = source_root.join(&relative);

        let there = corresponding_path(&file, &source_root, &target_root);
        prop_assert_eq!(relative_suffix(&there, &target_root), relative.clone());

        let back = corresponding_path(&there, &target_root, &source_root);
        prop_assert_eq!(back, file);
    }

    #[test]
    fn prop_outside_root_uses_file_name(
        relative in relative_path_strategy(),
    ) {
        let file = Path::new("/elsewhere").join(&relative);
        let target = corresponding_path(&file, Path::new("/source"), Path::new("/target"));
        prop_assert_eq!(target, Path::new("/target").join(relative.file_name().unwrap()));
    }

    #[cfg(unix)]
    #[test]
    fn prop_every_file_counted_once(
        files in prop::collection::btree_map(
            relative_path_strategy(),
            (content_strategy(), placement_strategy()),
            0..12,
        ),
    ) {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source");
        let target = temp_dir.path().join("target");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&target).unwrap();

        let mut expected = RunTally::default();
        for (relative, (content, placement)) in &files {
            let src = source.join(relative);
            let dst = target.join(relative);
            fs::create_dir_all(src.parent().unwrap()).unwrap();
            fs::create_dir_all(dst.parent().unwrap()).unwrap();
            fs::write(&src, content).unwrap();

            let outcome = match placement {
                Placement::Identical => {
                    fs::write(&dst, content).unwrap();
                    ComparisonOutcome::Match
                }
                Placement::Altered => {
                    let mut altered = content.clone();
                    altered.push(0x5a);
                    fs::write(&dst, altered).unwrap();
                    ComparisonOutcome::Mismatch
                }
                Placement::Absent => ComparisonOutcome::Missing,
                Placement::Unreadable => {
                    fs::create_dir_all(&dst).unwrap();
                    ComparisonOutcome::Mismatch
                }
                Placement::Unopenable => {
                    std::os::unix::net::UnixListener::bind(&dst).unwrap();
                    ComparisonOutcome::Error(String::new())
                }
            };
            expected.record(&outcome);
        }

        let mut sink = ReportSink::new(Vec::new(), None);
        let tally = TreeComparison::new(&source, &target).run(&mut sink).unwrap();

        prop_assert_eq!(tally, expected);
        prop_assert!(tally.is_consistent());
        prop_assert_eq!(tally.examined, files.len() as u64);
    }
}
