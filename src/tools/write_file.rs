//! Write-file tool: writes content to a file, creating parent directories as needed.

use std::fs;
use std::path::Path;

use crate::error::CcError;

/// Writes `content` to `filepath`, replacing any existing file.
///
/// Missing parent directories are created first. Returns the number of
/// bytes written.
pub fn write_file(filepath: &str, content: &str) -> Result<usize, CcError> {
    let path = Path::new(filepath);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CcError::FileIo {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, content).map_err(|e| CcError::FileIo {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(content.len())
}
