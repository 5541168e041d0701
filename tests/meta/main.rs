//! Checks that `tests/unit` mirrors `src` file for file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    // Entry points and module files organize code and carry no tests of their own
    fn is_organizational(relative_path: &str) -> bool {
        let file_name = relative_path.rsplit('/').next().unwrap_or(relative_path);
        matches!(file_name, "main.rs" | "lib.rs" | "mod.rs")
    }

    fn rust_paths(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_prefix_error| io::Error::other("Failed to strip prefix"))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                rust_paths(&path, base, paths)?;
                paths.insert(relative);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn collect(dir: &str) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        let result = rust_paths(Path::new(dir), Path::new(dir), &mut paths);
        assert!(result.is_ok(), "Failed to read {dir}: {result:?}");
        paths
    }

    fn report(header: &str, entries: &[String]) -> String {
        format!("{header}:\n{}", entries.join("\n"))
    }

    // Tests every source file has a unit test file at the same relative path
    // Verified by deleting tests/unit/field/grid.rs
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src = collect(SRC_DIR);
        let unit = collect(UNIT_DIR);

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !is_organizational(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source files without unit tests", &missing)
        );
    }

    // Tests no unit test file outlives its source file
    // Verified by adding tests/unit/field/extra.rs
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src = collect(SRC_DIR);
        let unit = collect(UNIT_DIR);

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !is_organizational(path) && !src.contains(*path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit test files without source files", &orphaned)
        );
    }

    // Tests every test file declares at least one test
    // Verified by removing the #[test] attributes from coords.rs
    #[test]
    fn test_all_test_files_contain_tests() {
        let files = collect(TESTS_DIR);

        let empty: Vec<String> = files
            .iter()
            .filter(|path| {
                Path::new(path).extension().and_then(|ext| ext.to_str()) == Some("rs")
                    && !is_organizational(path)
            })
            .filter(|path| {
                fs::read_to_string(Path::new(TESTS_DIR).join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without #[test] functions", &empty)
        );
    }
}
