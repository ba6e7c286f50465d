//! Output rendering abstraction.
//!
//! Defines the [`Renderer`] trait that keeps results and diagnostics on
//! separate channels. [`StdoutRenderer`] sends results to stdout and
//! diagnostics to stderr; tests use [`BufferRenderer`] to capture both.

use colored::Colorize;

use crate::error::CcError;

/// Trait for rendering handler output.
pub trait Renderer {
    /// Print one line of normal output.
    fn line(&mut self, text: &str);

    /// Print a `--- title ---` marker on the normal output channel.
    fn section(&mut self, title: &str);

    /// Print a diagnostic headline on the error channel.
    fn diagnostic(&mut self, message: &str);

    /// Print an unprefixed line on the error channel.
    fn detail(&mut self, text: &str);

    /// Report a handled failure: the headline, then any captured details.
    fn report(&mut self, err: &CcError) {
        self.diagnostic(&err.to_string());
        for detail in err.details() {
            self.detail(detail);
        }
    }
}

/// Renders to the process's stdout and stderr.
pub struct StdoutRenderer;

impl StdoutRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for StdoutRenderer {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn section(&mut self, title: &str) {
        println!("{}", format!("--- {} ---", title).cyan());
    }

    fn diagnostic(&mut self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }

    fn detail(&mut self, text: &str) {
        eprintln!("{}", text);
    }
}

/// Captures output in memory, one entry per line.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferRenderer {
    pub out: Vec<String>,
    pub err: Vec<String>,
}

#[cfg(test)]
impl BufferRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stdout(&self) -> String {
        self.out.join("\n")
    }

    pub fn stderr(&self) -> String {
        self.err.join("\n")
    }
}

#[cfg(test)]
impl Renderer for BufferRenderer {
    fn line(&mut self, text: &str) {
        self.out.push(text.to_string());
    }

    fn section(&mut self, title: &str) {
        self.out.push(format!("--- {} ---", title));
    }

    fn diagnostic(&mut self, message: &str) {
        self.err.push(format!("error: {}", message));
    }

    fn detail(&mut self, text: &str) {
        self.err.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_includes_details() {
        let mut renderer = BufferRenderer::new();
        renderer.report(&CcError::CommandFailed {
            code: 2,
            stdout: String::new(),
            stderr: "boom\n".into(),
        });
        assert_eq!(
            renderer.err,
            vec!["error: command failed (exit code: 2)", "boom"]
        );
        assert!(renderer.out.is_empty());
    }
}
