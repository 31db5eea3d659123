mod api;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let database_url = env::var("DATABASE_URL")
        .unwrap_or_else(|_| "mongodb://localhost:27017/RecipeRoute".to_string());

    log::info!("🚀 Starting RecipeRoute Service...");

    // Initialize MongoDB connection (one client, reused across requests)
    let db = database::MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000") // SPA dev server
            .allowed_origin("http://127.0.0.1:3000")
            .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .supports_credentials()
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Registration: idempotent upsert on first login
            .route("/api/register", web::post().to(api::register::register))
            // Favorites: embedded in the user document, keyed by email
            .service(
                web::scope("/api/user/{user_id}/favorites")
                    .route("", web::post().to(api::favorites::add_favorite))
                    .route("", web::get().to(api::favorites::list_favorites))
                    .route("/{recipe_id}", web::delete().to(api::favorites::remove_favorite)),
            )
            // Comments: independent documents grouped by recipe id
            .service(
                web::scope("/api/recipes/{recipe_id}/comments")
                    .route("", web::post().to(api::comments::add_comment))
                    .route("", web::get().to(api::comments::list_comments))
                    .route("/{comment_id}", web::delete().to(api::comments::remove_comment)),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
