//! Failure kinds a handler can report.
//!
//! Every variant is caught by [`App`](crate::app::App) and printed as a
//! diagnostic; none of them changes the process exit status. Argument
//! parsing failures never get this far, clap exits on its own.

use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CcError {
    #[error("environment variable {var} is not set; set the API key and try again")]
    MissingCredential { var: String },

    #[error("communication with the AI service failed: {0}")]
    Service(String),

    #[error("the AI service did not answer within {secs}s")]
    RequestTimeout { secs: u64 },

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("could not access file {}: {source}", path.display())]
    FileIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("could not list {}: {source}", path.display())]
    ListFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not launch command: {0}")]
    CommandLaunch(#[source] io::Error),

    #[error("command failed (exit code: {code})")]
    CommandFailed {
        code: i32,
        stdout: String,
        stderr: String,
    },

    #[error("command timed out after {secs}s")]
    CommandTimeout { secs: u64 },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CcError {
    /// Maps an I/O error on `path` to the matching file failure.
    pub fn from_file_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileIo { path, source }
        }
    }

    /// Extra lines printed after the headline, such as captured command output.
    pub fn details(&self) -> Vec<&str> {
        match self {
            Self::CommandFailed { stdout, stderr, .. } => [stdout.trim(), stderr.trim()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect(),
            _ => Vec::new(),
        }
    }
}
