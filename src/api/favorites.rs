use crate::{
    database::MongoDB,
    services::favorites_service::{self, AddFavoriteRequest},
    utils::error::ServiceError,
};
use actix_web::{web, HttpResponse, Responder};

/// POST /api/user/{userId}/favorites - adiciona favorito
///
/// {userId} é o email do usuário, não um id gerado.
#[utoipa::path(
    post,
    path = "/api/user/{userId}/favorites",
    tag = "Favorites",
    params(("userId" = String, Path, description = "User email")),
    request_body = AddFavoriteRequest,
    responses(
        (status = 200, description = "Favorite added"),
        (status = 500, description = "User absent or write failed")
    )
)]
pub async fn add_favorite(
    db: web::Data<MongoDB>,
    user_id: web::Path<String>,
    request: web::Json<AddFavoriteRequest>,
) -> impl Responder {
    log::info!("⭐ POST /user/{}/favorites - recipe {}", user_id, request.recipe_id);

    match favorites_service::add_favorite(&db, &user_id, request.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(e) => {
            log::error!("❌ Error adding favorite: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

/// DELETE /api/user/{userId}/favorites/{recipeId} - remove favorito
#[utoipa::path(
    delete,
    path = "/api/user/{userId}/favorites/{recipeId}",
    tag = "Favorites",
    params(
        ("userId" = String, Path, description = "User email"),
        ("recipeId" = String, Path, description = "Recipe id from the catalog")
    ),
    responses(
        (status = 200, description = "Favorite removed"),
        (status = 500, description = "User absent or write failed")
    )
)]
pub async fn remove_favorite(
    db: web::Data<MongoDB>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (user_id, recipe_id) = path.into_inner();

    log::info!("🗑️  DELETE /user/{}/favorites/{}", user_id, recipe_id);

    match favorites_service::remove_favorite(&db, &user_id, &recipe_id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(e) => {
            log::error!("❌ Error removing favorite: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

/// GET /api/user/{userId}/favorites - lista favoritos
///
/// Email sem registro responde 404, não lista vazia.
#[utoipa::path(
    get,
    path = "/api/user/{userId}/favorites",
    tag = "Favorites",
    params(("userId" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "User's favorites", body = Vec<crate::models::Favorite>),
        (status = 404, description = "User not registered"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn list_favorites(db: web::Data<MongoDB>, user_id: web::Path<String>) -> impl Responder {
    log::info!("📋 GET /user/{}/favorites", user_id);

    match favorites_service::list_favorites(&db, &user_id).await {
        Ok(favorites) => HttpResponse::Ok().json(favorites),
        Err(ServiceError::NotFound(msg)) => {
            log::warn!("⚠️ {}", msg);
            HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": msg
            }))
        }
        Err(e) => {
            log::error!("❌ Error listing favorites: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}
