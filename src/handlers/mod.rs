pub mod generation_handler;

use actix_web::web;

use crate::errors::AppError;

pub use generation_handler::{generate_questions, generate_topics, health_check, index};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(health_check)
        .service(generate_topics)
        .service(generate_questions);
}

/// JSON extractor settings: body size limit and errors in the `AppError` envelope.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}
