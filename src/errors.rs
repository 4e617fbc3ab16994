use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Invalid input encoding: {0}")]
    DecodeError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Chat completion failed: {0}")]
    RemoteCallError(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    EmptyResult(String),

    #[error("Not supported: {0}")]
    Unsupported(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::DecodeError(_) => "DECODE_ERROR",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::RemoteCallError(_) => "REMOTE_CALL_ERROR",
            AppError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AppError::EmptyResult(_) => "EMPTY_RESULT",
            AppError::Unsupported(_) => "UNSUPPORTED",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DecodeError(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::RemoteCallError(_) => StatusCode::BAD_GATEWAY,
            AppError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::EmptyResult(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unsupported(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
        })
    }
}

impl From<base64::DecodeError> for AppError {
    fn from(err: base64::DecodeError) -> Self {
        AppError::DecodeError(format!("text is not valid base64 ({})", err))
    }
}
impl From<std::string::FromUtf8Error> for AppError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        AppError::DecodeError(format!("decoded text is not valid UTF-8 ({})", err))
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::RemoteCallError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
