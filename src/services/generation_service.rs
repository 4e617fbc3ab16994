use std::{collections::HashMap, sync::Arc};

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{topic::number_topics, Question, QuestionType, Topic},
        dto::{
            generated::GeneratedMcqQuestion,
            request::{GenerateQuestionsRequest, GenerateTopicsRequest, QuestionConfig},
        },
    },
    services::{
        chat_client::ChatCompletionClient,
        input_decoder::{decode_base64, word_count},
        prompt_renderer::{PromptTemplates, PromptTopic},
        response_unwrapper::{unwrap_as, ReplyKey},
    },
};

/// Question configs grouped by the generator that serves them.
#[derive(Debug, Default)]
struct ConfigBatches<'a> {
    mcq: Vec<&'a QuestionConfig>,
    checkbox: Vec<&'a QuestionConfig>,
}

impl<'a> ConfigBatches<'a> {
    fn partition(configs: &'a [QuestionConfig]) -> Self {
        let mut batches = Self::default();
        for config in configs {
            match config.question_type {
                QuestionType::Mcq => batches.mcq.push(config),
                QuestionType::Checkbox => batches.checkbox.push(config),
            }
        }
        batches
    }
}

pub struct GenerationService {
    client: Arc<dyn ChatCompletionClient>,
    prompts: PromptTemplates,
    model: String,
}

impl GenerationService {
    pub fn new(
        client: Arc<dyn ChatCompletionClient>,
        prompts: PromptTemplates,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            prompts,
            model: model.into(),
        }
    }

    pub async fn generate_topics(&self, request: &GenerateTopicsRequest) -> AppResult<Vec<Topic>> {
        let text = decode_base64(&request.text)?;
        log::info!(
            "Generating {} topics from text with {} words",
            request.count,
            word_count(&text)
        );

        let prompt = self.prompts.generate_topics(request.count, &text)?;
        let reply = self.client.complete(&prompt, &self.model).await?;
        let labels: Vec<String> = unwrap_as(&reply, ReplyKey::Topics).inspect_err(|e| {
            log::warn!("Rejected topics reply: {}", e);
        })?;

        let topics = number_topics(labels);
        if topics.is_empty() {
            return Err(AppError::EmptyResult("Topic generation failed".to_string()));
        }

        log::info!("Generated {} topics", topics.len());
        Ok(topics)
    }

    pub async fn generate_questions(
        &self,
        request: &GenerateQuestionsRequest,
    ) -> AppResult<Vec<Question>> {
        let text = decode_base64(&request.text)?;
        log::info!(
            "Generating questions for {} configs from text with {} words",
            request.configs.len(),
            word_count(&text)
        );

        let batches = ConfigBatches::partition(&request.configs);

        if !batches.checkbox.is_empty() {
            return Err(AppError::Unsupported(format!(
                "{} question generation is not available ({} configs requested)",
                QuestionType::Checkbox,
                batches.checkbox.len()
            )));
        }

        let mut questions = Vec::new();
        if !batches.mcq.is_empty() {
            questions.extend(self.generate_mcq_questions(&text, &batches.mcq).await?);
        }

        for (question, id) in questions.iter_mut().zip(1..) {
            question.set_id(id);
        }

        log::info!("Generated {} questions", questions.len());
        Ok(questions)
    }

    /// Issues one prompt covering every mcq config.
    async fn generate_mcq_questions(
        &self,
        text: &str,
        configs: &[&QuestionConfig],
    ) -> AppResult<Vec<Question>> {
        let topics: Vec<PromptTopic<'_>> = configs
            .iter()
            .map(|config| PromptTopic {
                id: config.topic.id,
                text: &config.topic.text,
                question_count: config.count,
                level: config.level,
            })
            .collect();
        let total: u32 = configs.iter().map(|config| config.count).sum();

        let known_topics: HashMap<u32, Topic> = configs
            .iter()
            .map(|config| (config.topic.id, config.topic.clone()))
            .collect();

        let prompt = self.prompts.generate_mcq_questions(text, total, &topics)?;
        let reply = self.client.complete(&prompt, &self.model).await?;

        let generated: Vec<GeneratedMcqQuestion> = unwrap_as(&reply, ReplyKey::Questions)
            .inspect_err(|e| log::warn!("Rejected questions reply: {}", e))?;

        if generated.len() as u32 != total {
            log::warn!(
                "Requested {} mcq questions but the model returned {}",
                total,
                generated.len()
            );
        }

        generated
            .into_iter()
            .map(|question| question.into_question(&known_topics))
            .collect::<AppResult<Vec<_>>>()
            .inspect_err(|e| log::warn!("Rejected questions reply: {}", e))
    }
}
