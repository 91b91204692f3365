#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::{Path, PathBuf};

    const SRC_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";
    const HARNESS_FILES: [&str; 3] = ["lib.rs", "main.rs", "mod.rs"];

    // Tests every source module has a unit test file at the same relative path
    // Verified by adding a source file without a test counterpart
    #[test]
    fn test_sources_have_unit_tests() {
        let tests = module_files(Path::new(UNIT_ROOT));
        let missing: Vec<String> = module_files(Path::new(SRC_ROOT))
            .difference(&tests)
            .map(|path| format!("  - src/{0} -> tests/unit/{0}", path.display()))
            .collect();

        assert!(
            missing.is_empty(),
            "source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests every unit test file mirrors an existing source file
    // Verified by renaming a source file and leaving its tests behind
    #[test]
    fn test_unit_tests_have_sources() {
        let sources = module_files(Path::new(SRC_ROOT));
        let orphaned: Vec<String> = module_files(Path::new(UNIT_ROOT))
            .difference(&sources)
            .map(|path| format!("  - tests/unit/{}", path.display()))
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit test files without a source file:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests the unit harness declares every file and directory beside it
    // Verified by dropping a `mod` line from a harness file
    #[test]
    fn test_unit_harness_declares_every_module() {
        let mut undeclared = Vec::new();

        for harness in rust_files(Path::new(UNIT_ROOT))
            .into_iter()
            .filter(|path| is_harness(path))
        {
            let dir = harness.parent().unwrap_or_else(|| Path::new(UNIT_ROOT));
            let content = fs::read_to_string(&harness).unwrap_or_default();
            let entries = fs::read_dir(dir).map_or_else(|_| Vec::new(), |read| {
                read.filter_map(Result::ok).map(|entry| entry.path()).collect()
            });

            for entry in entries {
                let Some(name) = module_name(&entry) else {
                    continue;
                };
                if !content.contains(&format!("mod {name};")) {
                    undeclared.push(format!("  - {} in {}", name, harness.display()));
                }
            }
        }

        assert!(
            undeclared.is_empty(),
            "modules not declared by their harness:\n{}",
            undeclared.join("\n")
        );
    }

    // Tests every non-harness file under tests/ contains at least one test
    // Verified by emptying a unit test module
    #[test]
    fn test_test_files_contain_tests() {
        let empty: Vec<String> = rust_files(Path::new("tests"))
            .into_iter()
            .filter(|path| !is_harness(path))
            .filter(|path| {
                !fs::read_to_string(path).is_ok_and(|content| content.contains("#[test]"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }

    /// Non-harness `.rs` files under `root`, relative to it
    fn module_files(root: &Path) -> BTreeSet<PathBuf> {
        rust_files(root)
            .into_iter()
            .filter(|path| !is_harness(path))
            .filter_map(|path| path.strip_prefix(root).ok().map(Path::to_path_buf))
            .collect()
    }

    /// Every `.rs` file below `root`, walked without recursion
    fn rust_files(root: &Path) -> BTreeSet<PathBuf> {
        let mut files = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let Ok(entries) = fs::read_dir(&dir) else {
                continue;
            };
            for path in entries.filter_map(Result::ok).map(|entry| entry.path()) {
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    files.insert(path);
                }
            }
        }

        files
    }

    fn is_harness(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| HARNESS_FILES.contains(&name))
    }

    /// Module name a harness would declare for a directory entry
    fn module_name(entry: &Path) -> Option<String> {
        if entry.is_dir() {
            return entry.file_name().map(|name| name.to_string_lossy().to_string());
        }
        if is_harness(entry) || entry.extension().is_none_or(|ext| ext != "rs") {
            return None;
        }
        entry.file_stem().map(|stem| stem.to_string_lossy().to_string())
    }
}
