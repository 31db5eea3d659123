use crate::{
    database::MongoDB,
    services::comments_service::{self, AddCommentRequest},
};
use actix_web::{web, HttpResponse, Responder};

/// POST /api/recipes/{recipeId}/comments - adiciona comment
#[utoipa::path(
    post,
    path = "/api/recipes/{recipeId}/comments",
    tag = "Comments",
    params(("recipeId" = String, Path, description = "Recipe id from the catalog")),
    request_body = AddCommentRequest,
    responses(
        (status = 200, description = "Comment added"),
        (status = 500, description = "Write failed")
    )
)]
pub async fn add_comment(
    db: web::Data<MongoDB>,
    recipe_id: web::Path<String>,
    request: web::Json<AddCommentRequest>,
) -> impl Responder {
    log::info!("💬 POST /recipes/{}/comments - by {}", recipe_id, request.email);

    match comments_service::add_comment(&db, &recipe_id, request.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(e) => {
            log::error!("❌ Error adding comment: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

/// GET /api/recipes/{recipeId}/comments - lista comments
///
/// Receita sem comments responde 200 com lista vazia.
#[utoipa::path(
    get,
    path = "/api/recipes/{recipeId}/comments",
    tag = "Comments",
    params(("recipeId" = String, Path, description = "Recipe id from the catalog")),
    responses(
        (status = 200, description = "Comments for the recipe", body = Vec<comments_service::CommentInfo>),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn list_comments(db: web::Data<MongoDB>, recipe_id: web::Path<String>) -> impl Responder {
    log::info!("📋 GET /recipes/{}/comments", recipe_id);

    match comments_service::list_comments(&db, &recipe_id).await {
        Ok(comments) => HttpResponse::Ok().json(comments),
        Err(e) => {
            log::error!("❌ Error listing comments: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

/// DELETE /api/recipes/{recipeId}/comments/{commentId} - remove comment
#[utoipa::path(
    delete,
    path = "/api/recipes/{recipeId}/comments/{commentId}",
    tag = "Comments",
    params(
        ("recipeId" = String, Path, description = "Recipe id from the catalog"),
        ("commentId" = String, Path, description = "Comment ObjectId (hex)")
    ),
    responses(
        (status = 200, description = "Comment removed"),
        (status = 500, description = "Comment absent or write failed")
    )
)]
pub async fn remove_comment(
    db: web::Data<MongoDB>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (recipe_id, comment_id) = path.into_inner();

    log::info!("🗑️  DELETE /recipes/{}/comments/{}", recipe_id, comment_id);

    match comments_service::remove_comment(&db, &recipe_id, &comment_id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(e) => {
            log::error!("❌ Error removing comment: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}
