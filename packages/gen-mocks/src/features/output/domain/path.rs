//! Output file naming

use std::path::{Path, PathBuf};

use crate::shared::constants::output::{FILE_SUFFIX, GO_EXTENSION};

/// `out_dir/<stem>_mock.<ext>` for the file that declared the interfaces
pub fn output_path(out_dir: &Path, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = source
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| GO_EXTENSION.to_string());
    out_dir.join(format!("{}{}.{}", stem, FILE_SUFFIX, ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("svc"), Path::new("/src/app/user.go")),
            PathBuf::from("svc/user_mock.go")
        );
        assert_eq!(
            output_path(Path::new("."), Path::new("billing_service.go")),
            PathBuf::from("./billing_service_mock.go")
        );
    }

    #[test]
    fn test_only_the_last_extension_moves() {
        assert_eq!(
            output_path(Path::new("out"), Path::new("api.pb.go")),
            PathBuf::from("out/api.pb_mock.go")
        );
    }
}
