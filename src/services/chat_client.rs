use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

#[cfg(test)]
use mockall::automock;

/// A remote chat model that turns one prompt into one text reply.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str, model: &str) -> AppResult<String>;
}

fn build_request(prompt: &str, model: &str) -> AppResult<CreateChatCompletionRequest> {
    let request = CreateChatCompletionRequestArgs::default()
        .model(model)
        .messages([ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?
            .into()])
        .build()?;

    Ok(request)
}

fn reply_text(response: CreateChatCompletionResponse) -> AppResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| AppError::RemoteCallError("model returned no content".to_string()))
}

/// OpenAI-compatible chat completions over `async-openai`.
pub struct OpenAiChatClient {
    client: Client<OpenAIConfig>,
    timeout: Option<Duration>,
}

impl OpenAiChatClient {
    pub fn new(config: &Config) -> Self {
        let mut openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());
        if let Some(api_base) = &config.openai_api_base {
            openai_config = openai_config.with_api_base(api_base);
        }

        Self {
            client: Client::with_config(openai_config),
            timeout: config.chat_timeout(),
        }
    }
}

#[async_trait]
impl ChatCompletionClient for OpenAiChatClient {
    async fn complete(&self, prompt: &str, model: &str) -> AppResult<String> {
        let request = build_request(prompt, model)?;

        let chat = self.client.chat();
        let call = chat.create(request);

        let response = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                AppError::RemoteCallError(format!("no reply within {}s", limit.as_secs()))
            })?,
            None => call.await,
        };

        let response = response.map_err(|e| {
            log::error!("Chat completion request to model {} failed: {}", model, e);
            AppError::from(e)
        })?;

        reply_text(response)
    }
}
