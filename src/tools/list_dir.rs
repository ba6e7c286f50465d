//! List-dir tool: direct children of a path, in filesystem order.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::CcError;

/// A directory listing ready to print.
#[derive(Debug)]
pub struct Listing {
    /// The listed path made absolute against the working directory.
    pub absolute: PathBuf,
    /// Entry names as `read_dir` yields them; not sorted.
    pub entries: Vec<String>,
}

/// Lists the direct children of `path`.
///
/// Entries are collected before returning so a failure midway yields an
/// error rather than a partial listing.
pub fn list_dir(path: &str) -> Result<Listing, CcError> {
    let target = Path::new(path);
    if !target.exists() {
        return Err(CcError::PathNotFound {
            path: target.to_path_buf(),
        });
    }

    let list_err = |source| CcError::ListFailed {
        path: target.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(target).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        entries.push(entry.file_name().to_string_lossy().into_owned());
    }

    let cwd = std::env::current_dir().map_err(list_err)?;
    Ok(Listing {
        absolute: absolutize(&cwd, target),
        entries,
    })
}

/// Joins `path` onto `base` and folds `.` and `..` lexically.
///
/// Symlinks are not resolved.
fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in base.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
