use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use quizgen_server::{
    app_state::AppState,
    config::Config,
    handlers::{configure, json_config},
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let state = AppState::new(config.clone()).map_err(|e| {
        log::error!("{}", e);
        std::io::Error::other(e.to_string())
    })?;

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    log::info!(
        "starting HTTP server on {}:{} using model {}",
        bind_addr.0,
        bind_addr.1,
        config.chat_model
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&config.cors_allowed_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config(config.max_payload_bytes))
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
