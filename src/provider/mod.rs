//! LLM provider abstraction for cc.
//!
//! [`ChatModel`] is the seam the `ask` handler talks to. [`Provider`] is the
//! real implementation, a rig-core Gemini client; tests substitute their own.

mod client;

pub use client::Provider;

use crate::error::CcError;
use crate::message::Turn;

/// Something that can continue a conversation.
///
/// The runtime is single-threaded, so futures need not be `Send`.
#[async_trait::async_trait(?Send)]
pub trait ChatModel {
    /// Sends `prompt` with `history` as prior context and returns the reply text.
    async fn chat(&self, history: &[Turn], prompt: &str) -> Result<String, CcError>;
}
