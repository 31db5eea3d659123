// ==================== RECIPE COMMENTS ====================
// Comments são documentos independentes na collection "comments",
// agrupados por recipeId. Não pertencem ao documento do usuário.

use crate::{database::MongoDB, models::Comment, utils::error::ServiceError};
use chrono::Utc;
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AddCommentRequest {
    pub email: String,
    pub content: String,
}

/// Comment como vai no JSON de resposta (_id já convertido para hex)
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CommentInfo {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "recipeId")]
    pub recipe_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub username: String,
    pub content: String,
    pub timestamp: String,
}

fn current_timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// POST /api/recipes/{recipeId}/comments - adiciona comment
///
/// Timestamp é gerado no servidor. Conteúdo é texto livre, sem limite
/// de tamanho e sem sanitização - o cliente renderiza como plain text.
pub async fn add_comment(
    db: &MongoDB,
    recipe_id: &str,
    request: AddCommentRequest,
) -> Result<(), ServiceError> {
    log::info!("💬 Adding comment on recipe {} by {}", recipe_id, request.email);

    let comments = db.collection::<Comment>("comments");

    let comment = Comment {
        id: None,
        recipe_id: recipe_id.to_string(),
        user_id: request.email.clone(),
        username: request.email,
        content: request.content,
        timestamp: current_timestamp(),
    };

    comments
        .insert_one(comment)
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))?;

    Ok(())
}

/// GET /api/recipes/{recipeId}/comments - lista comments da receita
///
/// Ordem natural da collection; zero comments é lista vazia, não erro.
pub async fn list_comments(db: &MongoDB, recipe_id: &str) -> Result<Vec<CommentInfo>, ServiceError> {
    let comments = db.collection::<Comment>("comments");

    let mut cursor = comments
        .find(doc! { "recipeId": recipe_id })
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))?;

    let mut result = Vec::new();
    while let Some(comment) = cursor.next().await {
        let comment = comment.map_err(|e| ServiceError::Database(e.to_string()))?;
        result.push(CommentInfo {
            id: comment.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            recipe_id: comment.recipe_id,
            user_id: comment.user_id,
            username: comment.username,
            content: comment.content,
            timestamp: comment.timestamp,
        });
    }

    Ok(result)
}

/// DELETE /api/recipes/{recipeId}/comments/{commentId} - remove comment
///
/// Comments são documentos top-level: o delete é por _id, com o
/// recipeId na query como guarda de escopo.
pub async fn remove_comment(
    db: &MongoDB,
    recipe_id: &str,
    comment_id: &str,
) -> Result<(), ServiceError> {
    log::info!("🗑️  Removing comment {} from recipe {}", comment_id, recipe_id);

    let oid = ObjectId::parse_str(comment_id)
        .map_err(|e| ServiceError::WriteFailed(format!("invalid comment id: {}", e)))?;

    let comments = db.collection::<Comment>("comments");

    let result = comments
        .delete_one(doc! { "_id": oid, "recipeId": recipe_id })
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))?;

    if result.deleted_count == 0 {
        return Err(ServiceError::WriteFailed(format!(
            "no comment {} on recipe {}",
            comment_id, recipe_id
        )));
    }

    Ok(())
}
