use serde::{Deserialize, Serialize};

use super::Topic;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionOption {
    pub id: u32,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionLevel {
    #[serde(alias = "Easy", alias = "EASY")]
    Easy,
    #[serde(alias = "Medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "Hard", alias = "HARD")]
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Mcq,      // exactly one correct option
    Checkbox, // zero or more correct options
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionType::Mcq => write!(f, "mcq"),
            QuestionType::Checkbox => write!(f, "checkbox"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct McqQuestion {
    pub id: u32,
    pub text: String,
    pub topic: Topic,
    pub options: Vec<QuestionOption>,
    pub level: QuestionLevel,
    pub correct_option_id: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxQuestion {
    pub id: u32,
    pub text: String,
    pub topic: Topic,
    pub options: Vec<QuestionOption>,
    pub level: QuestionLevel,
    pub correct_option_ids: Vec<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Question {
    Mcq(McqQuestion),
    Checkbox(CheckboxQuestion),
}

impl Question {
    pub fn id(&self) -> u32 {
        match self {
            Question::Mcq(q) => q.id,
            Question::Checkbox(q) => q.id,
        }
    }

    pub fn topic(&self) -> &Topic {
        match self {
            Question::Mcq(q) => &q.topic,
            Question::Checkbox(q) => &q.topic,
        }
    }

    pub fn question_type(&self) -> QuestionType {
        match self {
            Question::Mcq(_) => QuestionType::Mcq,
            Question::Checkbox(_) => QuestionType::Checkbox,
        }
    }

    pub(crate) fn set_id(&mut self, id: u32) {
        match self {
            Question::Mcq(q) => q.id = id,
            Question::Checkbox(q) => q.id = id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_options() -> Vec<QuestionOption> {
        vec![
            QuestionOption {
                id: 1,
                text: "Stack".to_string(),
            },
            QuestionOption {
                id: 2,
                text: "Heap".to_string(),
            },
        ]
    }

    #[test]
    fn mcq_question_serializes_with_type_tag_and_camel_case() {
        let question = Question::Mcq(McqQuestion {
            id: 7,
            text: "Where does a Box store its value?".to_string(),
            topic: Topic::new(1, "Memory"),
            options: sample_options(),
            level: QuestionLevel::Medium,
            correct_option_id: 2,
        });

        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["type"], "mcq");
        assert_eq!(value["correctOptionId"], 2);
        assert_eq!(value["level"], "medium");
        assert_eq!(value["topic"], json!({"id": 1, "text": "Memory"}));
        assert!(value.get("correct_option_id").is_none());
    }

    #[test]
    fn checkbox_question_deserializes_from_tagged_json() {
        let question: Question = serde_json::from_value(json!({
            "type": "checkbox",
            "id": 3,
            "text": "Which live on the heap?",
            "topic": {"id": 2, "text": "Memory"},
            "options": [{"id": 1, "text": "Box"}, {"id": 2, "text": "Vec buffer"}],
            "level": "hard",
            "correctOptionIds": [1, 2]
        }))
        .unwrap();

        assert_eq!(question.question_type(), QuestionType::Checkbox);
        assert_eq!(question.id(), 3);
        assert_eq!(question.topic().text, "Memory");
    }

    #[test]
    fn question_type_rejects_unknown_variant() {
        let parsed = serde_json::from_str::<QuestionType>("\"essay\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn question_level_accepts_capitalized_aliases() {
        let level: QuestionLevel = serde_json::from_str("\"Hard\"").unwrap();
        assert_eq!(level, QuestionLevel::Hard);
        assert_eq!(serde_json::to_string(&level).unwrap(), "\"hard\"");
    }

    #[test]
    fn set_id_renumbers_either_variant() {
        let mut question = Question::Mcq(McqQuestion {
            id: 10,
            text: "q".to_string(),
            topic: Topic::new(1, "t"),
            options: sample_options(),
            level: QuestionLevel::Easy,
            correct_option_id: 1,
        });

        question.set_id(1);
        assert_eq!(question.id(), 1);
    }
}
