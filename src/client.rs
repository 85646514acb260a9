use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::ChefError;

/// A single chat message in the proxy wire format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: MessageContent,
}

impl Message {
    /// A message with the "user" role.
    pub fn user(content: MessageContent) -> Self {
        Self {
            role: "user".to_string(),
            content,
        }
    }
}

/// Message content: either a bare instruction string or multimodal blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// One element of a multimodal content array
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Image { source: ImageSource },
    Text { text: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn image(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        ContentBlock::Image {
            source: ImageSource {
                kind: "base64".to_string(),
                media_type: media_type.into(),
                data: data.into(),
            },
        }
    }
}

/// Base64 image source inside an image content block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSource {
    #[serde(rename = "type")]
    pub kind: String,
    pub media_type: String,
    pub data: String,
}

/// Request body sent to the proxy endpoint
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    messages: &'a [Message],
}

/// The slice of the response envelope we consume; everything else is opaque
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    content: Vec<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    text: Option<String>,
}

/// A completion endpoint the orchestrator can send messages to.
///
/// Implementations make one request per call and return the model's text
/// reply. They carry no retry, streaming, or timeout behavior.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send the messages and return the first text block of the reply.
    async fn complete(&self, messages: &[Message]) -> Result<String, ChefError>;

    /// Short name for logging (e.g. "proxy").
    fn backend_name(&self) -> &str;
}

/// Client for a serverless proxy that holds the real API key server-side.
///
/// The proxy accepts `{ "messages": [...] }` and relays the upstream
/// model's response envelope untouched, so no authentication headers are
/// sent from here.
pub struct ProxyClient {
    client: Client,
    endpoint: String,
}

impl ProxyClient {
    /// Create a client for the given proxy endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        ProxyClient {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionBackend for ProxyClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, ChefError> {
        debug!("Sending completion request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&CompletionRequest { messages })
            .send()
            .await?;

        // Check for HTTP errors
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ChefError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        debug!("Completion response: {:?}", body);

        let envelope: CompletionResponse = serde_json::from_str(&body).map_err(|e| {
            ChefError::malformed(format!("unexpected response envelope: {e}"), body.as_str())
        })?;

        envelope
            .content
            .into_iter()
            .next()
            .and_then(|c| c.text)
            .ok_or_else(|| ChefError::malformed("no text content in response", body))
    }

    fn backend_name(&self) -> &str {
        "proxy"
    }
}
