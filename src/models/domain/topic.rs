use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest topic text, in characters, accepted back in a question config.
pub const MAX_TOPIC_CHARS: u64 = 500;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct Topic {
    pub id: u32,
    #[validate(length(min = 1, max = "MAX_TOPIC_CHARS"))]
    pub text: String,
}

impl Topic {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Numbers raw topic labels `1..N` in reply order, skipping blank labels and
/// cutting long ones down to [`MAX_TOPIC_CHARS`].
pub fn number_topics<I>(labels: I) -> Vec<Topic>
where
    I: IntoIterator<Item = String>,
{
    labels
        .into_iter()
        .map(|label| clip_label(&label))
        .filter(|label| !label.is_empty())
        .zip(1..)
        .map(|(text, id)| Topic { id, text })
        .collect()
}

fn clip_label(label: &str) -> String {
    let label = label.trim();
    match label.char_indices().nth(MAX_TOPIC_CHARS as usize) {
        Some((cut, _)) => label[..cut].trim_end().to_string(),
        None => label.to_string(),
    }
}
