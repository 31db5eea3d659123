use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Documento na collection "comments"
///
/// Comments são documentos top-level agrupados por recipeId, não ficam
/// aninhados dentro do User. userId e username recebem ambos o email
/// do autor.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "recipeId")]
    pub recipe_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub username: String,
    pub content: String,
    /// ISO 8601, gerado no insert, nunca atualizado
    pub timestamp: String,
}
