use crate::error::{Result, UpdateError};
use std::io;
use std::path::{Path, PathBuf};

/// Checks the target file before it is read or overwritten.
pub struct PathValidator;

impl PathValidator {
    /// Canonicalises the target path and ensures it names a regular file.
    pub fn validate_target_file(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        let canonical = path
            .canonicalize()
            .map_err(|e| UpdateError::io(path, e))?;

        if !canonical.is_file() {
            return Err(UpdateError::io(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }

        Ok(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn accepts_regular_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("Dockerfile");
        fs::write(&file_path, "FROM scratch\n").unwrap();
        let canonical = PathValidator::validate_target_file(&file_path).unwrap();
        assert!(canonical.is_absolute());
        assert!(canonical.ends_with("Dockerfile"));
    }

    #[test]
    fn rejects_directory() {
        let dir = tempdir().unwrap();
        let err = PathValidator::validate_target_file(dir.path()).unwrap_err();
        assert!(matches!(err, UpdateError::Io { .. }));
    }

    #[test]
    fn rejects_missing_file() {
        let dir = tempdir().unwrap();
        let err = PathValidator::validate_target_file(dir.path().join("Dockerfile")).unwrap_err();
        match err {
            UpdateError::Io { path, source } => {
                assert!(path.ends_with("Dockerfile"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
