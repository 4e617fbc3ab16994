use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{AppError, AppResult};

const FENCE: &str = "```";

/// A fence marker that opens its own line, optionally followed by a language tag.
static FENCE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^```[A-Za-z0-9_-]*[ \t]*\r?$").expect("FENCE_LINE is a valid regex pattern")
});

/// Top-level member the model is asked to wrap its answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKey {
    Topics,
    Questions,
}

impl ReplyKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyKey::Topics => "topics",
            ReplyKey::Questions => "questions",
        }
    }
}

/// Returns the interior of a markdown code fence, or the trimmed input when
/// the reply is not fenced.
///
/// Only a fence at the very start of the reply or at the start of a line
/// counts, so backticks inside JSON string values are left alone.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    if let Some(rest) = trimmed.strip_prefix(FENCE) {
        let body =
            rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        return close_fence(body);
    }

    // prose before the block
    match FENCE_LINE.find(trimmed) {
        Some(open) => close_fence(&trimmed[open.end()..]),
        None => trimmed,
    }
}

/// Drops the closing marker and anything after it; an unclosed block is kept whole.
fn close_fence(body: &str) -> &str {
    let body = body.trim();
    if let Some(inner) = body.strip_suffix(FENCE) {
        return inner.trim();
    }

    match FENCE_LINE.find_iter(body).last() {
        Some(close) => body[..close.start()].trim(),
        None => body,
    }
}

/// Parses a model reply and returns the member stored under `key`.
pub fn unwrap_reply(raw: &str, key: ReplyKey) -> AppResult<Value> {
    let body = strip_code_fence(raw);

    let value: Value = serde_json::from_str(body).map_err(|e| {
        AppError::MalformedResponse(format!("reply is not valid JSON ({})", e))
    })?;

    match value {
        Value::Object(mut map) => map.remove(key.as_str()).ok_or_else(|| {
            AppError::MalformedResponse(format!("reply has no '{}' member", key.as_str()))
        }),
        other => Err(AppError::MalformedResponse(format!(
            "reply is a JSON {} instead of an object",
            json_kind(&other)
        ))),
    }
}

/// Like [`unwrap_reply`], then deserializes the member strictly into `T`.
pub fn unwrap_as<T: DeserializeOwned>(raw: &str, key: ReplyKey) -> AppResult<T> {
    let member = unwrap_reply(raw, key)?;
    serde_json::from_value(member).map_err(|e| {
        AppError::MalformedResponse(format!("'{}' has an unexpected shape ({})", key.as_str(), e))
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
