use base64::{engine::general_purpose::STANDARD, Engine};

use crate::errors::AppResult;

/// Decodes the base64 `text` field clients send into plain UTF-8.
pub fn decode_base64(data: &str) -> AppResult<String> {
    let bytes = STANDARD.decode(data.trim())?;
    Ok(String::from_utf8(bytes)?)
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
