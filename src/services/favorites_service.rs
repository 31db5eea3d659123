// ==================== FAVORITES MANAGEMENT ====================
// Favoritos ficam embutidos no documento do usuário (array favorites),
// então cada operação é um update atômico de documento único.

use crate::{
    database::MongoDB,
    models::{Favorite, User},
    utils::error::ServiceError,
};
use mongodb::bson::doc;
use serde::Deserialize;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AddFavoriteRequest {
    #[serde(rename = "recipeId")]
    pub recipe_id: String,
    pub title: String,
    pub image: String,
}

/// POST /api/user/{userId}/favorites - adiciona receita aos favoritos
///
/// title/image são o snapshot de exibição no momento do favorito; nunca
/// são re-buscados do catálogo. Não há checagem de duplicata: favoritar
/// a mesma receita duas vezes gera duas entradas.
pub async fn add_favorite(
    db: &MongoDB,
    user_email: &str,
    request: AddFavoriteRequest,
) -> Result<(), ServiceError> {
    log::info!("⭐ Adding recipe {} to favorites of {}", request.recipe_id, user_email);

    let users = db.collection::<User>("users");

    let favorite = Favorite {
        recipe_id: request.recipe_id,
        title: request.title,
        image: request.image,
        comments: vec![],
    };

    let favorite_bson =
        mongodb::bson::to_bson(&favorite).map_err(|e| ServiceError::Database(e.to_string()))?;

    let result = users
        .update_one(
            doc! { "email": user_email },
            doc! { "$push": { "favorites": favorite_bson } },
        )
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))?;

    // Zero modificados: usuário inexistente ou escrita perdida
    if result.modified_count == 0 {
        return Err(ServiceError::WriteFailed(format!(
            "no user document modified for {}",
            user_email
        )));
    }

    Ok(())
}

/// DELETE /api/user/{userId}/favorites/{recipeId} - remove dos favoritos
///
/// $pull remove todas as entradas com o recipeId (inclusive duplicatas).
pub async fn remove_favorite(
    db: &MongoDB,
    user_email: &str,
    recipe_id: &str,
) -> Result<(), ServiceError> {
    log::info!("🗑️  Removing recipe {} from favorites of {}", recipe_id, user_email);

    let users = db.collection::<User>("users");

    let result = users
        .update_one(
            doc! { "email": user_email },
            doc! { "$pull": { "favorites": { "recipeId": recipe_id } } },
        )
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))?;

    if result.modified_count == 0 {
        return Err(ServiceError::WriteFailed(format!(
            "no user document modified for {}",
            user_email
        )));
    }

    Ok(())
}

/// GET /api/user/{userId}/favorites - lista favoritos do usuário
///
/// Retorna o array verbatim. Usuário inexistente é NotFound (404),
/// não lista vazia.
pub async fn list_favorites(db: &MongoDB, user_email: &str) -> Result<Vec<Favorite>, ServiceError> {
    let users = db.collection::<User>("users");

    let user = users
        .find_one(doc! { "email": user_email })
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))?;

    match user {
        Some(user) => Ok(user.favorites),
        None => Err(ServiceError::NotFound(format!("user {}", user_email))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::registration_service::{register_user, RegisterRequest};

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/RecipeRouteTest".to_string());
        MongoDB::new(&uri).await.expect("MongoDB must be running")
    }

    async fn fresh_user(db: &MongoDB, email: &str) {
        let users = db.collection::<User>("users");
        users.delete_many(doc! { "email": email }).await.unwrap();
        register_user(
            db,
            RegisterRequest {
                email: email.to_string(),
                name: "A".to_string(),
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_add_then_list() {
        let db = test_db().await;
        let email = "favorites-add@test.com";
        fresh_user(&db, email).await;

        add_favorite(
            &db,
            email,
            AddFavoriteRequest {
                recipe_id: "123".to_string(),
                title: "Soup".to_string(),
                image: "u1".to_string(),
            },
        )
        .await
        .unwrap();

        let favorites = list_favorites(&db, email).await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].recipe_id, "123");
        assert_eq!(favorites[0].title, "Soup");
        assert_eq!(favorites[0].image, "u1");
        assert!(favorites[0].comments.is_empty());
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_remove_then_list() {
        let db = test_db().await;
        let email = "favorites-remove@test.com";
        fresh_user(&db, email).await;

        for recipe in ["123", "456"] {
            add_favorite(
                &db,
                email,
                AddFavoriteRequest {
                    recipe_id: recipe.to_string(),
                    title: "Soup".to_string(),
                    image: "u1".to_string(),
                },
            )
            .await
            .unwrap();
        }

        remove_favorite(&db, email, "123").await.unwrap();

        let favorites = list_favorites(&db, email).await.unwrap();
        assert!(favorites.iter().all(|f| f.recipe_id != "123"));
        assert_eq!(favorites.len(), 1);
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_add_for_missing_user_is_write_failed() {
        let db = test_db().await;
        let users = db.collection::<User>("users");
        users
            .delete_many(doc! { "email": "ghost@test.com" })
            .await
            .unwrap();

        let result = add_favorite(
            &db,
            "ghost@test.com",
            AddFavoriteRequest {
                recipe_id: "123".to_string(),
                title: "Soup".to_string(),
                image: "u1".to_string(),
            },
        )
        .await;

        assert!(matches!(result, Err(ServiceError::WriteFailed(_))));
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_list_for_missing_user_is_not_found() {
        let db = test_db().await;
        let users = db.collection::<User>("users");
        users
            .delete_many(doc! { "email": "ghost@test.com" })
            .await
            .unwrap();

        let result = list_favorites(&db, "ghost@test.com").await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_duplicate_favorites_are_allowed() {
        let db = test_db().await;
        let email = "favorites-dup@test.com";
        fresh_user(&db, email).await;

        for _ in 0..2 {
            add_favorite(
                &db,
                email,
                AddFavoriteRequest {
                    recipe_id: "123".to_string(),
                    title: "Soup".to_string(),
                    image: "u1".to_string(),
                },
            )
            .await
            .unwrap();
        }

        // Sem constraint de unicidade no array
        let favorites = list_favorites(&db, email).await.unwrap();
        assert_eq!(favorites.len(), 2);
    }
}
