//! Shared test utilities.
//!
//! Fixture setup for export tests and helpers for inspecting the tree an
//! export leaves behind.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let (_tmp, options) = export_options();
//! export(&Site::standard(), &Templates::standard(), &options).unwrap();
//!
//! let html = read_output(&options.output_dir, Path::new("index_ru.html"));
//! assert_eq!(html_files(&options.output_dir).len(), 18);
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::export::ExportOptions;

// =========================================================================
// Fixture setup
// =========================================================================

/// The crate's own `assets/` directory.
pub fn crate_assets_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

/// Export options writing into a fresh temp directory, reading the crate's
/// assets.
///
/// Keep the returned `TempDir` alive for as long as the output is needed.
pub fn export_options() -> (TempDir, ExportOptions) {
    let tmp = TempDir::new().unwrap();
    let options = ExportOptions {
        output_dir: tmp.path().join("docs"),
        assets_dir: crate_assets_dir(),
        base_url: "/".to_string(),
        year: 2025,
    };
    (tmp, options)
}

/// Write `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

// =========================================================================
// Output inspection
// =========================================================================

pub fn read_output(output_dir: &Path, relative: &Path) -> String {
    let path = output_dir.join(relative);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

/// Every `.html` file under `output_dir`, relative and sorted.
pub fn html_files(output_dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(output_dir)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "html"))
        .map(|e| e.path().strip_prefix(output_dir).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}
