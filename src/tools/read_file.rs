//! Read-file tool: loads a whole file as UTF-8 text.

use std::fs;

use crate::error::CcError;

/// Reads `filepath` into a string.
///
/// # Errors
///
/// [`CcError::FileNotFound`] when the file does not exist, [`CcError::FileIo`]
/// for everything else (permissions, directories, invalid UTF-8).
pub fn read_file(filepath: &str) -> Result<String, CcError> {
    fs::read_to_string(filepath).map_err(|e| CcError::from_file_io(filepath, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello\nworld").unwrap();
        let content = read_file(path.to_str().unwrap()).unwrap();
        assert_eq!(content, "hello\nworld");
    }

    #[test]
    fn test_read_nonexistent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CcError::FileNotFound { .. }));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = read_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CcError::FileIo { .. }));
    }

    #[test]
    fn test_read_directory() {
        let dir = TempDir::new().unwrap();
        let err = read_file(dir.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CcError::FileIo { .. }));
    }
}
