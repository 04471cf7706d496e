//! Source-tree walking shared by the architecture tests.

use std::fs;
use std::path::{Path, PathBuf};

/// A Rust source file under `crates/`, outside this package.
pub struct SourceFile {
    /// Path relative to `crates/`, with `/` separators.
    pub path: String,
    pub content: String,
}

impl SourceFile {
    #[allow(dead_code)]
    pub fn has_tests(&self) -> bool {
        self.content.contains("#[test]")
    }
}

fn crates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .expect("architecture-tests lives under crates/")
}

/// Every `.rs` file in the workspace crates except the architecture tests,
/// which quote the patterns they look for.
pub fn workspace_sources() -> Vec<SourceFile> {
    let root = crates_dir();
    let own = Path::new(env!("CARGO_MANIFEST_DIR"));

    walkdir::WalkDir::new(&root)
        .into_iter()
        .filter_entry(|e| e.path() != own && e.file_name() != "target")
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| {
            let relative = e.path().strip_prefix(&root).unwrap_or(e.path());
            SourceFile {
                path: relative.to_string_lossy().replace('\\', "/"),
                content: fs::read_to_string(e.path()).expect("source file is readable"),
            }
        })
        .collect()
}
