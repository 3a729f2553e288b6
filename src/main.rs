use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use tripforge_api::routes;
use tripforge_api::services::gemini_service::{ContentGenerator, GeminiService};
use tripforge_api::services::task_service::TaskStore;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    // Fail fast on a missing credential rather than on the first request
    let gemini = GeminiService::from_env().expect("GEMINI_API_KEY must be set");
    let generator: Arc<dyn ContentGenerator> = Arc::new(gemini);
    println!("Gemini client configured");

    let store = TaskStore::new();

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(generator.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/travel")
                    .route("", web::get().to(routes::travel::travel_info))
                    .route(
                        "/process-destinations",
                        web::post().to(routes::travel::process_destinations),
                    )
                    .route(
                        "/task-status/{task_id}",
                        web::get().to(routes::travel::task_status),
                    )
                    .route(
                        "/itinerary",
                        web::post().to(routes::travel::generate_itinerary),
                    )
                    .route("/test-gemini", web::get().to(routes::travel::test_gemini)),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
