//! Main test module for treecmp
//!
//! This module includes all test suites:
//! - Integration tests for end-to-end runs over fixture trees
//! - Property-based tests for invariants

pub mod property;

#[cfg(test)]
mod edge_cases {
    use ::treecmp::*;
    use std::fs;
    use tempfile::TempDir;

    fn run(source: &std::path::Path, target: &std::path::Path) -> RunTally {
        let mut sink = ReportSink::new(Vec::new(), None);
        TreeComparison::new(source, target).run(&mut sink).unwrap()
    }

    #[test]
    fn test_empty_source() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        fs::write(target.path().join("extra.txt"), "only in target").unwrap();

        // Files only present in the target are not looked at
        let tally = run(source.path(), target.path());
        assert_eq!(tally, RunTally::default());
    }

    #[test]
    fn test_empty_directories_not_counted() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        fs::create_dir_all(source.path().join("a/b/c")).unwrap();

        let tally = run(source.path(), target.path());
        assert_eq!(tally.examined, 0);
    }

    #[test]
    fn test_special_filenames() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();

        let special_names = vec![
            "file with spaces.txt",
            "file-with-dashes.txt",
            "file.with.dots.txt",
            "file@with#special$chars.txt",
            "file(with)parens.txt",
            "file[with]brackets.txt",
            "файл.txt",
            "文件.txt",
            "🚀🌟💾.txt",
        ];

        let mut written = 0;
        for name in &special_names {
            let content = format!("Content of {}", name);
            if fs::write(source.path().join(name), &content).is_err() {
                // Skip if OS doesn't support this filename
                continue;
            }
            fs::write(target.path().join(name), &content).unwrap();
            written += 1;
        }

        let tally = run(source.path(), target.path());
        assert_eq!(tally.examined, written);
        assert_eq!(tally.matches, written);
    }

    #[test]
    fn test_deeply_nested() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();

        let nested = (0..20).map(|i| format!("level{i}")).collect::<Vec<_>>().join("/");
        fs::create_dir_all(source.path().join(&nested)).unwrap();
        fs::create_dir_all(target.path().join(&nested)).unwrap();
        fs::write(source.path().join(&nested).join("deep.bin"), [0u8, 1, 2]).unwrap();
        fs::write(target.path().join(&nested).join("deep.bin"), [0u8, 1, 2]).unwrap();

        let tally = run(source.path(), target.path());
        assert_eq!(tally.examined, 1);
        assert_eq!(tally.matches, 1);
    }

    #[test]
    fn test_directory_in_place_of_file_is_mismatch() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        fs::write(source.path().join("a.txt"), "a").unwrap();
        fs::create_dir(target.path().join("a.txt")).unwrap();

        let tally = run(source.path(), target.path());
        assert_eq!(tally.examined, 1);
        assert_eq!(tally.mismatches, 1);
        assert_eq!(tally.errors, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_socket_in_place_of_file_is_error() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        fs::write(source.path().join("a.txt"), "a").unwrap();
        fs::write(source.path().join("b.txt"), "b").unwrap();
        fs::write(target.path().join("b.txt"), "b").unwrap();
        std::os::unix::net::UnixListener::bind(target.path().join("a.txt")).unwrap();

        let tally = run(source.path(), target.path());
        assert_eq!(tally.examined, 2);
        assert_eq!(tally.errors, 1);
        assert_eq!(tally.matches, 1);
        assert_eq!(tally.mismatches, 0);
    }

    #[test]
    fn test_file_in_place_of_directory_is_missing() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        fs::create_dir(source.path().join("sub")).unwrap();
        fs::write(source.path().join("sub/x.txt"), "x").unwrap();
        fs::write(target.path().join("sub"), "not a directory").unwrap();

        let tally = run(source.path(), target.path());
        assert_eq!(tally.examined, 1);
        assert_eq!(tally.missing, 1);
        assert_eq!(tally.errors, 0);
    }
}
