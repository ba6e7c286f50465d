//! File loading and layering for cc configuration.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::{Config, PartialConfig};

impl Config {
    /// Reads one config file, or `None` if it does not exist.
    ///
    /// A missing file is never created.
    pub(super) fn read_partial(path: &Path) -> Result<Option<PartialConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let partial: PartialConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {:?}", path))?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(Some(partial))
    }

    /// Look for `cc.toml` in `start`, then walk up to the git root.
    pub(super) fn find_project_file(start: &Path) -> Option<PathBuf> {
        let mut dir = start.to_path_buf();
        loop {
            let candidate = dir.join(crate::constants::PROJECT_CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            // Stop at git root or filesystem root
            if dir.join(".git").exists() || !dir.pop() {
                return None;
            }
        }
    }

    /// Overlay the fields `partial` sets onto `self`.
    pub(super) fn merge(mut self, partial: PartialConfig) -> Self {
        if let Some(model) = partial.model {
            self.model = model;
        }
        if let Some(var) = partial.api_key_env {
            self.api_key_env = var;
        }
        if partial.base_url.is_some() {
            self.base_url = partial.base_url;
        }
        if partial.system_prompt.is_some() {
            self.system_prompt = partial.system_prompt;
        }
        if let Some(max_tokens) = partial.max_tokens {
            self.max_tokens = max_tokens;
        }
        if partial.timeouts.request_secs.is_some() {
            self.timeouts.request_secs = partial.timeouts.request_secs;
        }
        if partial.timeouts.command_secs.is_some() {
            self.timeouts.command_secs = partial.timeouts.command_secs;
        }
        self
    }
}
