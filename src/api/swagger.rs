use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RecipeRoute Service API",
        version = "1.0.0",
        description = "Backend API for the RecipeRoute recipe-discovery app. \n\n**Scope:** user registration, favorite recipes, and recipe comments. Recipe search and detail data come from the third-party catalog, consumed directly by the client.\n\n**Identity:** the client authenticates against an external identity provider; user identity is carried as the email in the path.",
        contact(
            name = "RecipeRoute Team"
        )
    ),
    paths(
        // Health
        crate::api::health::health_check,

        // Registration
        crate::api::register::register,

        // Favorites
        crate::api::favorites::add_favorite,
        crate::api::favorites::remove_favorite,
        crate::api::favorites::list_favorites,

        // Comments
        crate::api::comments::add_comment,
        crate::api::comments::list_comments,
        crate::api::comments::remove_comment,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::services::registration_service::RegisterRequest,
            crate::services::favorites_service::AddFavoriteRequest,
            crate::services::comments_service::AddCommentRequest,
            crate::services::comments_service::CommentInfo,
            crate::models::Favorite,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint for monitoring service status."),
        (name = "Register", description = "Idempotent user registration, called once per authenticated session."),
        (name = "Favorites", description = "Per-user favorite recipes, embedded in the user document. The userId path segment is the user's email."),
        (name = "Comments", description = "Free-text comments attached to a recipe id, stored as independent documents."),
    )
)]
pub struct ApiDoc;
