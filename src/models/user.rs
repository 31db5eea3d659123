use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

/// Documento na collection "users" - um por email
///
/// O email é o identificador primário: todas as queries usam email,
/// nunca o _id gerado pelo MongoDB.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub favorites: Vec<Favorite>,
    // Campo legado: comments moram na collection "comments", este array
    // fica sempre vazio (mantido por compatibilidade de dados)
    #[serde(default)]
    pub comments: Vec<Bson>,
}

/// Item dentro do array favorites - snapshot do catálogo no momento do favorito
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct Favorite {
    #[serde(rename = "recipeId")]
    pub recipe_id: String,
    pub title: String,
    pub image: String,
    // Campo legado, sempre vazio
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub comments: Vec<Bson>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_wire_format() {
        let favorite = Favorite {
            recipe_id: "123".to_string(),
            title: "Soup".to_string(),
            image: "u1".to_string(),
            comments: vec![],
        };

        let json = serde_json::to_value(&favorite).unwrap();
        assert_eq!(json["recipeId"], "123");
        assert_eq!(json["title"], "Soup");
        assert_eq!(json["image"], "u1");
        assert_eq!(json["comments"], serde_json::json!([]));
    }

    #[test]
    fn test_user_deserializes_without_optional_arrays() {
        // Documentos antigos podem não ter os arrays
        let user: User = serde_json::from_str(r#"{"email":"a@x.com","name":"A"}"#).unwrap();
        assert_eq!(user.email, "a@x.com");
        assert!(user.favorites.is_empty());
        assert!(user.comments.is_empty());
    }
}
