//! Local tools behind the `read`, `write`, `ls` and `run` subcommands.
//!
//! Each tool is a single blocking or awaited call that returns a typed
//! result or a [`CcError`](crate::error::CcError); printing is left to the
//! caller.

pub mod list_dir;
pub mod read_file;
pub mod shell;
pub mod write_file;
