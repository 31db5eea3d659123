// ==================== USER REGISTRATION ====================
// Upsert idempotente disparado no primeiro login autenticado.
// O identity provider já validou email/nome - aqui confiamos nos valores.

use crate::{database::MongoDB, models::User, utils::error::ServiceError};
use mongodb::bson::doc;
use serde::Deserialize;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
}

/// POST /api/register - registra o usuário se ainda não existe
///
/// Chamado uma vez por sessão pelo cliente. Se o email já tem registro,
/// nada é modificado (nem o nome).
pub async fn register_user(db: &MongoDB, request: RegisterRequest) -> Result<(), ServiceError> {
    let users = db.collection::<User>("users");

    let existing = users
        .find_one(doc! { "email": &request.email })
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))?;

    if existing.is_some() {
        log::info!("👤 User {} already registered", request.email);
        return Ok(());
    }

    let user = User {
        email: request.email.clone(),
        name: request.name,
        favorites: vec![],
        comments: vec![],
    };

    users
        .insert_one(user)
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))?;

    log::info!("✅ New user created: {}", request.email);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/RecipeRouteTest".to_string());
        MongoDB::new(&uri).await.expect("MongoDB must be running")
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_register_is_idempotent() {
        let db = test_db().await;
        let users = db.collection::<User>("users");
        let email = "idempotent@test.com";

        users.delete_many(doc! { "email": email }).await.unwrap();

        let first = register_user(
            &db,
            RegisterRequest {
                email: email.to_string(),
                name: "First".to_string(),
            },
        )
        .await;
        assert!(first.is_ok());

        // Segunda chamada com outro nome: não insere nem muta
        let second = register_user(
            &db,
            RegisterRequest {
                email: email.to_string(),
                name: "Second".to_string(),
            },
        )
        .await;
        assert!(second.is_ok());

        let count = users.count_documents(doc! { "email": email }).await.unwrap();
        assert_eq!(count, 1);

        let stored = users.find_one(doc! { "email": email }).await.unwrap().unwrap();
        assert_eq!(stored.name, "First");
        assert!(stored.favorites.is_empty());
        assert!(stored.comments.is_empty());
    }
}
