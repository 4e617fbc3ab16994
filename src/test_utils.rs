#[cfg(test)]
pub mod fixtures {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde_json::json;

    use crate::models::{
        domain::{QuestionLevel, QuestionType, Topic},
        dto::request::QuestionConfig,
    };

    /// Base64-encodes text the way clients send it
    pub fn encode(text: &str) -> String {
        STANDARD.encode(text)
    }

    /// Creates a medium-level mcq config for one topic
    pub fn mcq_config(topic_id: u32, topic_text: &str, count: u32) -> QuestionConfig {
        QuestionConfig {
            topic: Topic::new(topic_id, topic_text),
            count,
            level: QuestionLevel::Medium,
            question_type: QuestionType::Mcq,
        }
    }

    /// Builds a fenced questions reply; one question per `(topic_id, question_id)`
    pub fn mcq_reply(questions: &[(u32, u32)]) -> String {
        let questions: Vec<_> = questions
            .iter()
            .map(|(topic_id, question_id)| {
                json!({
                    "id": question_id,
                    "topic": {"id": topic_id, "text": format!("Topic {}", topic_id)},
                    "type": "mcq",
                    "level": "medium",
                    "text": format!("Question {}?", question_id),
                    "options": [
                        {"id": 1, "text": "first"},
                        {"id": 2, "text": "second"},
                        {"id": 3, "text": "third"}
                    ],
                    "correct_option_id": 2
                })
            })
            .collect();

        format!("```json\n{}\n```", json!({ "questions": questions }))
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_encode() {
        assert_eq!(encode("hello"), "aGVsbG8=");
    }

    #[test]
    fn test_fixtures_mcq_reply_is_fenced_json() {
        let reply = mcq_reply(&[(1, 1), (2, 2)]);

        assert!(reply.starts_with("```json\n"));
        let body = reply
            .trim_start_matches("```json\n")
            .trim_end_matches("\n```");
        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(value["questions"].as_array().unwrap().len(), 2);
        assert_eq!(value["questions"][1]["topic"]["id"], 2);
    }
}
