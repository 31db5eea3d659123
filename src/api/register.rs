use crate::{
    database::MongoDB,
    services::registration_service::{self, RegisterRequest},
};
use actix_web::{web, HttpResponse, Responder};

/// POST /api/register - registra usuário no primeiro login
///
/// Idempotente: chamadas repetidas com o mesmo email respondem 200 sem
/// modificar nada.
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered or already present"),
        (status = 500, description = "Store unavailable or write failed")
    )
)]
pub async fn register(
    db: web::Data<MongoDB>,
    request: web::Json<RegisterRequest>,
) -> impl Responder {
    log::info!("📝 POST /api/register - {}", request.email);

    match registration_service::register_user(&db, request.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(e) => {
            log::error!("❌ Error registering user: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}
