use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use skillmint_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::new(config)
        .await
        .expect("failed to initialise application state");

    let host = state.config.web_server_host.clone();
    let port = state.config.web_server_port;
    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();
        for origin in &state.config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::health_check)
            .service(handlers::health_check_ready)
            .service(handlers::health_check_live)
            .service(handlers::generate_outline)
            .service(handlers::generate_full_course)
            .service(handlers::evaluate_answer)
            .service(handlers::get_course)
            .service(handlers::list_courses)
            .service(handlers::delete_course)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
