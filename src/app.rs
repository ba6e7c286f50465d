//! Application state and subcommand handlers.
//!
//! [`App`] owns the conversation [`History`] and the [`Renderer`].
//! Configuration is handed only to the handlers that use it (`ask`, `run`).
//! Each handler runs to completion and reports any
//! [`CcError`] through the renderer instead of returning it, so a handled
//! failure never changes the exit status.

use crate::config::Config;
use crate::constants::{file_context, REPLY_FOOTER, REPLY_LABEL};
use crate::error::CcError;
use crate::history::History;
use crate::output::Renderer;
use crate::provider::{ChatModel, Provider};
use crate::tools::{list_dir, read_file, shell, write_file};

pub struct App<R: Renderer> {
    history: History,
    renderer: R,
}

impl<R: Renderer> App<R> {
    /// Creates an app with an empty history.
    pub fn new(renderer: R) -> Self {
        Self {
            history: History::new(),
            renderer,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn settle(&mut self, result: Result<(), CcError>) {
        if let Err(err) = result {
            tracing::debug!(error = ?err, "handler failed");
            self.renderer.report(&err);
        }
    }

    /// `ask`: resolves the credential, builds the Gemini client and sends the prompt.
    ///
    /// Without a credential no client is built and nothing goes over the network.
    pub async fn ask(&mut self, config: &Config, prompt: &str) {
        let provider = config
            .resolve_api_key()
            .and_then(|key| Provider::from_config(config, &key));
        match provider {
            Ok(provider) => self.ask_with(&provider, prompt).await,
            Err(err) => self.settle(Err(err)),
        }
    }

    /// Sends `prompt` plus the current history to `model`.
    ///
    /// On success the reply is printed and the exchange appended; on failure
    /// the history is left untouched.
    pub async fn ask_with(&mut self, model: &dyn ChatModel, prompt: &str) {
        self.renderer.line("Thinking...");
        self.renderer.line("");
        let result = model.chat(self.history.turns(), prompt).await;
        let result = result.map(|reply| {
            self.renderer.section(REPLY_LABEL);
            self.renderer.line(&reply);
            self.renderer.line(REPLY_FOOTER);
            self.history.push_exchange(prompt, reply);
        });
        self.settle(result);
    }

    /// `read`: loads a file into the conversation as one user turn.
    pub fn read(&mut self, filepath: &str) {
        let result = read_file::read_file(filepath).map(|content| {
            self.history.push_user(file_context(filepath, &content));
            self.renderer
                .line(&format!("Loaded file into AI context: {}", filepath));
        });
        self.settle(result);
    }

    /// `write`: writes `content` to `filepath`, creating parent directories.
    pub fn write(&mut self, filepath: &str, content: &str) {
        let result = write_file::write_file(filepath, content).map(|bytes| {
            tracing::debug!(bytes, path = filepath, "file written");
            self.renderer.line(&format!("Wrote file: {}", filepath));
        });
        self.settle(result);
    }

    /// `ls`: prints a header, every direct child of `path`, then a footer.
    pub fn ls(&mut self, path: &str) {
        let result = list_dir::list_dir(path).map(|listing| {
            self.renderer
                .section(&format!("Listing of {}", listing.absolute.display()));
            for name in &listing.entries {
                self.renderer.line(name);
            }
            self.renderer.section("End of listing");
        });
        self.settle(result);
    }

    /// `run`: echoes and executes a shell command, printing what it captured.
    pub async fn run(&mut self, config: &Config, command: &str) {
        self.renderer.line(&format!("$ {}", command));
        let timeout = config.timeouts.command_secs;
        let result = shell::run_command(command, timeout).await.map(|output| {
            let stdout = output.stdout.trim();
            if !stdout.is_empty() {
                self.renderer.section("stdout");
                self.renderer.line(stdout);
            }
            let stderr = output.stderr.trim();
            if !stderr.is_empty() {
                self.renderer.section("stderr");
                self.renderer.line(stderr);
            }
        });
        self.settle(result);
    }

    /// `commit`: placeholder, no git interaction yet.
    pub fn commit(&mut self) {
        self.renderer.line("Assisting Git commit with AI...");
        self.renderer.line("(this feature is not implemented yet)");
    }

    /// Reports a failure found before a handler body ran, such as a broken config.
    pub fn report(&mut self, err: CcError) {
        self.settle(Err(err));
    }
}
