use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{GenerateQuestionsRequest, GenerateTopicsRequest},
        response::{DataResponse, MessageResponse},
    },
};

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Hello World!"))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[post("/generate_topics")]
async fn generate_topics(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateTopicsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    log::info!(
        "[{}] generate_topics called with count {}",
        get_request_id(&req).unwrap_or_default(),
        request.count
    );

    let topics = state.generation_service.generate_topics(&request).await?;
    Ok(HttpResponse::Ok().json(DataResponse::new(topics)))
}

#[post("/generate_questions")]
async fn generate_questions(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    log::info!(
        "[{}] generate_questions called with {} configs",
        get_request_id(&req).unwrap_or_default(),
        request.configs.len()
    );

    let questions = state.generation_service.generate_questions(&request).await?;
    Ok(HttpResponse::Ok().json(DataResponse::new(questions)))
}
