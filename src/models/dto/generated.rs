//! Shapes the chat model is asked to reply with, and their conversion into
//! domain questions.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{McqQuestion, Question, QuestionLevel, QuestionOption, Topic},
};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GeneratedOption {
    pub id: u32,
    #[validate(length(min = 1))]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedTopicRef {
    pub id: u32,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GeneratedMcqQuestion {
    pub id: u32,
    pub topic: GeneratedTopicRef,
    pub level: QuestionLevel,
    #[validate(length(min = 1))]
    pub text: String,
    #[validate(length(min = 2), nested)]
    pub options: Vec<GeneratedOption>,
    #[serde(alias = "correctOptionId")]
    pub correct_option_id: u32,
}

impl GeneratedMcqQuestion {
    /// Checks the reply against the requested topics and turns it into a
    /// domain question carrying the caller's topic text.
    pub fn into_question(self, known_topics: &HashMap<u32, Topic>) -> AppResult<Question> {
        self.validate().map_err(|e| {
            AppError::MalformedResponse(format!("question {} is invalid: {}", self.id, e))
        })?;

        let mut seen = HashSet::new();
        if let Some(dup) = self.options.iter().find(|o| !seen.insert(o.id)) {
            return Err(AppError::MalformedResponse(format!(
                "question {} repeats option id {}",
                self.id, dup.id
            )));
        }

        if !seen.contains(&self.correct_option_id) {
            return Err(AppError::MalformedResponse(format!(
                "question {} marks option {} correct but has no such option",
                self.id, self.correct_option_id
            )));
        }

        let topic = known_topics.get(&self.topic.id).cloned().ok_or_else(|| {
            AppError::MalformedResponse(format!(
                "question {} belongs to topic {} ({:?}) which was not requested",
                self.id, self.topic.id, self.topic.text
            ))
        })?;

        Ok(Question::Mcq(McqQuestion {
            id: self.id,
            text: self.text,
            topic,
            options: self
                .options
                .into_iter()
                .map(|o| QuestionOption { id: o.id, text: o.text })
                .collect(),
            level: self.level,
            correct_option_id: self.correct_option_id,
        }))
    }
}
