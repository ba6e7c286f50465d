//! Configuration types and loading for cc.
//!
//! Settings are TOML. A global file lives at the platform's XDG config path
//! (e.g. `~/.config/cc/config.toml` on Linux) and a project file `cc.toml`
//! may sit in the working directory or any parent up to the git root.

mod loader;
mod paths;
mod resolve;
mod types;

pub use types::Config;

use anyhow::Result;
use std::path::Path;

impl Config {
    /// Load config with precedence: project > global > defaults.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let global = Self::config_path().ok();
        Self::load_from(global.as_deref(), &cwd)
    }

    /// Load config from an explicit global file and project search start.
    pub fn load_from(global: Option<&Path>, project_start: &Path) -> Result<Self> {
        let mut config = Self::default();
        if let Some(partial) = global.map(|path| Self::read_partial(path)).transpose()?.flatten() {
            config = config.merge(partial);
        }
        if let Some(path) = Self::find_project_file(project_start) {
            if let Some(partial) = Self::read_partial(&path)? {
                config = config.merge(partial);
            }
        }

        config.resolve_substitutions();
        Ok(config)
    }
}
