use std::collections::HashMap;

use serde::Serialize;

use crate::{
    constants::prompts::{GENERATE_MCQ_QUESTIONS_PROMPT, GENERATE_TOPICS_PROMPT},
    errors::{AppError, AppResult},
    models::domain::QuestionLevel,
};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    GenerateTopics,
    GenerateMcqQuestions,
}

impl TemplateName {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::GenerateTopics => "generate_topics",
            TemplateName::GenerateMcqQuestions => "generate_mcq_questions",
        }
    }
}

/// One entry of the topics payload embedded in the mcq prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PromptTopic<'a> {
    pub id: u32,
    pub text: &'a str,
    pub question_count: u32,
    pub level: QuestionLevel,
}

/// Prompt templates, built once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    templates: HashMap<TemplateName, String>,
}

impl PromptTemplates {
    pub fn builtin() -> Self {
        Self::with_templates([
            (TemplateName::GenerateTopics, GENERATE_TOPICS_PROMPT),
            (TemplateName::GenerateMcqQuestions, GENERATE_MCQ_QUESTIONS_PROMPT),
        ])
    }

    pub fn with_templates<I, S>(templates: I) -> Self
    where
        I: IntoIterator<Item = (TemplateName, S)>,
        S: Into<String>,
    {
        Self {
            templates: templates
                .into_iter()
                .map(|(name, body)| (name, body.into()))
                .collect(),
        }
    }

    /// Substitutes every `{{name}}` placeholder in a single pass, so values
    /// are inserted verbatim and never rescanned for placeholders.
    pub fn render(&self, name: TemplateName, variables: &HashMap<&str, String>) -> AppResult<String> {
        let template = self.templates.get(&name).ok_or_else(|| {
            AppError::InternalError(format!("prompt template '{}' is not registered", name.as_str()))
        })?;

        let mut rendered = String::with_capacity(template.len());
        let mut rest = template.as_str();

        while let Some(start) = rest.find(OPEN) {
            let after_open = &rest[start + OPEN.len()..];
            let Some(end) = after_open.find(CLOSE) else {
                break;
            };

            let key = after_open[..end].trim();
            let value = variables.get(key).ok_or_else(|| {
                AppError::InternalError(format!(
                    "prompt template '{}' needs variable '{}'",
                    name.as_str(),
                    key
                ))
            })?;

            rendered.push_str(&rest[..start]);
            rendered.push_str(value);
            rest = &after_open[end + CLOSE.len()..];
        }

        rendered.push_str(rest);
        Ok(rendered)
    }

    pub fn generate_topics(&self, count: u32, text: &str) -> AppResult<String> {
        let variables = HashMap::from([("count", count.to_string()), ("text", text.to_string())]);
        self.render(TemplateName::GenerateTopics, &variables)
    }

    pub fn generate_mcq_questions(
        &self,
        text: &str,
        count: u32,
        topics: &[PromptTopic<'_>],
    ) -> AppResult<String> {
        let topics_json = serde_json::to_string_pretty(topics)
            .map_err(|e| AppError::InternalError(format!("failed to encode topics payload: {}", e)))?;

        let variables = HashMap::from([
            ("count", count.to_string()),
            ("text", text.to_string()),
            ("topics", topics_json),
        ]);
        self.render(TemplateName::GenerateMcqQuestions, &variables)
    }
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self::builtin()
    }
}
