//! Assertions on generated output

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

/// Assert the file at `path` holds exactly `expected`
pub fn assert_file_eq(path: &Path, expected: &str) {
    let actual = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
    assert_eq!(actual, expected, "contents of {}", path.display());
}

/// Sorted names of the files directly inside `dir`
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(_) => Vec::new(),
    };
    names.sort();
    names
}

/// Split preview output into (`# path` header, contents) pairs
pub fn split_preview(output: &str) -> Vec<(String, String)> {
    let mut files: Vec<(String, String)> = Vec::new();
    for line in output.split_inclusive('\n') {
        match line.strip_prefix("# ") {
            Some(path) => files.push((path.trim_end().to_string(), String::new())),
            None => {
                if let Some((_, contents)) = files.last_mut() {
                    contents.push_str(line);
                }
            }
        }
    }
    files
}
