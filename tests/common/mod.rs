use std::{collections::VecDeque, sync::Arc};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use tokio::sync::Mutex;

use quizgen_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    services::chat_client::ChatCompletionClient,
};

/// Chat client that replays canned replies and records every call.
pub struct ScriptedChatClient {
    replies: Mutex<VecDeque<AppResult<String>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedChatClient {
    pub fn new<I>(replies: I) -> Arc<Self>
    where
        I: IntoIterator<Item = AppResult<String>>,
    {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Client that fails every call; for requests that must not reach the model.
    pub fn silent() -> Arc<Self> {
        Self::new(Vec::<AppResult<String>>::new())
    }

    pub fn replying(reply: &str) -> Arc<Self> {
        Self::new([Ok(reply.to_string())])
    }

    /// `(prompt, model)` for every call made so far.
    pub async fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl ChatCompletionClient for ScriptedChatClient {
    async fn complete(&self, prompt: &str, model: &str) -> AppResult<String> {
        self.calls
            .lock()
            .await
            .push((prompt.to_string(), model.to_string()));

        self.replies.lock().await.pop_front().unwrap_or_else(|| {
            Err(AppError::RemoteCallError("no scripted reply left".to_string()))
        })
    }
}

pub fn test_config() -> Config {
    Config {
        openai_api_key: secrecy::SecretString::from("sk-integration".to_string()),
        openai_api_base: None,
        chat_model: "gpt-integration".to_string(),
        chat_timeout_seconds: 5,
        cors_allowed_origin: "http://localhost:3000".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 0,
        max_payload_bytes: 64 * 1024,
    }
}

pub fn app_state(client: Arc<ScriptedChatClient>) -> AppState {
    AppState::with_client(test_config(), client)
}

pub fn encode(text: &str) -> String {
    STANDARD.encode(text)
}
