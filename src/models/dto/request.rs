use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{QuestionLevel, QuestionType, Topic};

pub const MAX_COUNT: u32 = 50;
pub const MAX_CONFIGS: u64 = 50;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GenerateTopicsRequest {
    /// Base64-encoded source text.
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,

    #[validate(range(min = 1, max = "MAX_COUNT"))]
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct QuestionConfig {
    #[validate(nested)]
    pub topic: Topic,

    #[validate(range(min = 1, max = "MAX_COUNT"))]
    pub count: u32,

    pub level: QuestionLevel,

    #[serde(rename = "type")]
    pub question_type: QuestionType,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GenerateQuestionsRequest {
    /// Base64-encoded source text.
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,

    #[validate(length(min = 1, max = "MAX_CONFIGS"), nested)]
    pub configs: Vec<QuestionConfig>,
}
