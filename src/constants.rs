//! Centralized constants for cc.
//!
//! Default strings and configuration values live here so they can be
//! changed in one place.

/// Application name used in directory paths.
pub const APP_NAME: &str = "cc";

/// Default Gemini model identifier.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Environment variable holding the Gemini API key.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Maximum tokens for LLM completions.
pub const DEFAULT_MAX_TOKENS: u64 = 8192;

/// Configuration filename under the XDG config directory.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Per-project configuration filename.
pub const PROJECT_CONFIG_FILENAME: &str = "cc.toml";

/// Label printed above a model reply.
pub const REPLY_LABEL: &str = "Gemini";

/// Footer printed below a model reply.
pub const REPLY_FOOTER: &str = "--------------";

/// Log filter used when neither `RUST_LOG` nor `--verbose` is given.
pub const DEFAULT_LOG_FILTER: &str = "cc=warn";

/// Log filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "cc=debug";

/// Wraps file contents into the user turn added by `read`.
pub fn file_context(filepath: &str, content: &str) -> String {
    format!(
        "File \"{}\" has been loaded. Its contents follow.\n\n---\n{}\n---",
        filepath, content
    )
}
