use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        chat_client::{ChatCompletionClient, OpenAiChatClient},
        generation_service::GenerationService,
        prompt_renderer::PromptTemplates,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;

        let client = Arc::new(OpenAiChatClient::new(&config));
        Ok(Self::with_client(config, client))
    }

    /// Wires the service around any chat client; tests pass scripted ones.
    pub fn with_client(config: Config, client: Arc<dyn ChatCompletionClient>) -> Self {
        let generation_service = Arc::new(GenerationService::new(
            client,
            PromptTemplates::builtin(),
            config.chat_model.clone(),
        ));

        Self {
            generation_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_from_valid_config() {
        let state = AppState::new(Config::test_config()).unwrap();
        assert_eq!(state.config.chat_model, "gpt-test");
    }

    #[test]
    fn test_app_state_rejects_missing_api_key() {
        let config = Config {
            openai_api_key: SecretString::from(String::new()),
            ..Config::test_config()
        };

        assert!(AppState::new(config).is_err());
    }
}
