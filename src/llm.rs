use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::GleanError;

/// A chat-completion collaborator: a fixed system instruction plus one user
/// prompt in, generated text out. `stream` changes the transport framing
/// only; either way the full completion comes back as a single String.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        model: &str,
        stream: bool,
    ) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: StreamDelta,
}

#[derive(Debug, Deserialize, Default)]
struct StreamDelta {
    content: Option<String>,
}

#[derive(Debug, PartialEq)]
enum StreamEvent {
    Delta(String),
    Done,
}

/// Parses one SSE line from the completions stream. Returns None for
/// keep-alive comments, blank lines, and frames without text content.
fn parse_sse_line(line: &str) -> Option<StreamEvent> {
    let data = line.strip_prefix("data:")?.trim();
    if data == "[DONE]" {
        return Some(StreamEvent::Done);
    }
    let chunk: StreamChunk = serde_json::from_str(data).ok()?;
    let content = chunk.choices.into_iter().next()?.delta.content?;
    if content.is_empty() {
        return None;
    }
    Some(StreamEvent::Delta(content))
}

/// OpenRouter chat-completions client.
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String, base_url: String) -> Result<OpenRouterClient> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(OpenRouterClient {
            client,
            api_key,
            base_url,
        })
    }

    async fn drain_stream(response: reqwest::Response) -> Result<String> {
        let mut body = response.bytes_stream();
        let mut pending: Vec<u8> = Vec::new();
        let mut text = String::new();

        while let Some(chunk) = body.next().await {
            let chunk = chunk.context("Failed to read completion stream")?;
            pending.extend_from_slice(&chunk);

            // SSE frames are line-delimited; a chunk can end mid-line.
            while let Some(pos) = pending.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = pending.drain(..=pos).collect();
                let line = String::from_utf8_lossy(&line);
                match parse_sse_line(line.trim()) {
                    Some(StreamEvent::Done) => return Ok(text),
                    Some(StreamEvent::Delta(delta)) => text.push_str(&delta),
                    None => {}
                }
            }
        }

        Ok(text)
    }
}

#[async_trait]
impl ChatModel for OpenRouterClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        model: &str,
        stream: bool,
    ) -> Result<String> {
        let request = ChatRequest {
            model,
            stream,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
        };

        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", "https://github.com/glean")
            .header("X-Title", "glean")
            .json(&request)
            .send()
            .await
            .context("Failed to send completion request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GleanError::CompletionApi { status, body }.into());
        }

        if stream {
            Self::drain_stream(response).await
        } else {
            let parsed: ChatResponse = response
                .json()
                .await
                .context("Failed to parse completion response")?;
            parsed
                .choices
                .into_iter()
                .next()
                .map(|c| c.message.content)
                .ok_or_else(|| GleanError::EmptyCompletion.into())
        }
    }
}
