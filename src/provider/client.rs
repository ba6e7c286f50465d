//! Gemini client built on rig-core.

use std::time::Duration;

use anyhow::Context;
use rig::client::CompletionClient;
use rig::completion::Chat;
use rig::message::Message as RigMessage;
use rig::providers::gemini;

use super::ChatModel;
use crate::config::Config;
use crate::error::CcError;
use crate::message::{Role, Turn};

/// A configured Gemini model ready to handle chat requests.
///
/// Agents are built on each call since they are cheap to create.
pub struct Provider {
    client: gemini::Client,
    model: String,
    preamble: Option<String>,
    max_tokens: u64,
    request_timeout: Option<u64>,
}

impl Provider {
    /// Creates a new [`Provider`] from the loaded config and API key.
    ///
    /// # Errors
    ///
    /// Returns [`CcError::Service`] if client construction fails.
    pub fn from_config(config: &Config, api_key: &str) -> Result<Self, CcError> {
        let client = match config.base_url.as_deref() {
            Some(url) => gemini::Client::builder()
                .api_key(api_key)
                .base_url(url.to_string())
                .build()
                .context("Failed to create Gemini client"),
            None => gemini::Client::new(api_key).context("Failed to create Gemini client"),
        }
        .map_err(|e| CcError::Service(format!("{e:#}")))?;

        Ok(Self {
            client,
            model: config.model.clone(),
            preamble: config.system_prompt.clone(),
            max_tokens: config.max_tokens,
            request_timeout: config.timeouts.request_secs,
        })
    }
}

#[async_trait::async_trait(?Send)]
impl ChatModel for Provider {
    async fn chat(&self, history: &[Turn], prompt: &str) -> Result<String, CcError> {
        let mut builder = self.client.agent(&self.model).max_tokens(self.max_tokens);
        if let Some(ref sys) = self.preamble {
            builder = builder.preamble(sys.as_str());
        }
        let agent = builder.build();

        let chat_history = to_rig_history(history);
        tracing::debug!(
            model = %self.model,
            turns = chat_history.len(),
            "sending chat request"
        );

        let request = agent.chat(prompt.to_string(), chat_history);
        let reply = match self.request_timeout {
            Some(secs) => tokio::time::timeout(Duration::from_secs(secs), request)
                .await
                .map_err(|_| CcError::RequestTimeout { secs })?,
            None => request.await,
        }
        .map_err(|e| CcError::Service(e.to_string()))?;

        tracing::debug!(chars = reply.len(), "received reply");
        Ok(reply)
    }
}

/// Converts cc turns to rig-core messages, preserving order.
fn to_rig_history(history: &[Turn]) -> Vec<RigMessage> {
    history
        .iter()
        .map(|turn| match turn.role() {
            Role::User => RigMessage::user(turn.text()),
            Role::Model => RigMessage::assistant(turn.text()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_conversion_keeps_roles_and_order() {
        let history = vec![Turn::user("q"), Turn::model("a"), Turn::user("file")];
        let converted = to_rig_history(&history);
        assert_eq!(converted.len(), 3);
        assert!(matches!(converted[0], RigMessage::User { .. }));
        assert!(matches!(converted[1], RigMessage::Assistant { .. }));
        assert!(matches!(converted[2], RigMessage::User { .. }));
    }

    /// A Gemini provider pointed at a local endpoint.
    fn local_provider(addr: std::net::SocketAddr, request_secs: Option<u64>) -> Provider {
        let mut config = Config {
            base_url: Some(format!("http://{}", addr)),
            ..Config::default()
        };
        config.timeouts.request_secs = request_secs;
        Provider::from_config(&config, "dummy-key").unwrap()
    }

    #[tokio::test]
    async fn test_silent_endpoint_hits_request_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept connections and hold them open without ever answering.
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let provider = local_provider(addr, Some(1));
        let result = provider.chat(&[Turn::user("earlier")], "hello").await;
        assert!(matches!(result, Err(CcError::RequestTimeout { secs: 1 })));
        server.abort();
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_service_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider = local_provider(addr, Some(10));
        let result = provider.chat(&[], "hello").await;
        assert!(matches!(result, Err(CcError::Service(_))));
    }

    #[test]
    fn test_from_config_copies_settings() {
        let config = Config {
            model: "gemini-test".into(),
            system_prompt: Some("be terse".into()),
            ..Config::default()
        };
        let provider = Provider::from_config(&config, "dummy-key").unwrap();
        assert_eq!(provider.model, "gemini-test");
        assert_eq!(provider.preamble.as_deref(), Some("be terse"));
        assert_eq!(provider.request_timeout, None);
    }
}
