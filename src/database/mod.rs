use mongodb::{Client, Collection, Database};
use std::error::Error;

/// Conexão compartilhada com o MongoDB
///
/// Criada uma vez no startup e clonada para cada worker - o Client do
/// driver já faz pooling internamente.
#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        // Timeouts
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Extract database name from URI or use default
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .filter(|s| !s.is_empty() && !s.contains(':'))
            .unwrap_or("RecipeRoute");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { client, db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates necessary indexes for optimal query performance
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::options::IndexOptions;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        // users(email) unique - email é a chave primária lógica
        let users = self.db.collection::<mongodb::bson::Document>("users");

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match users.create_index(email_index).await {
            Ok(_) => log::info!("   ✅ Index created: users(email) unique"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // comments(recipeId) - listagem de comments por receita
        let comments = self.db.collection::<mongodb::bson::Document>("comments");

        let recipe_index = IndexModel::builder()
            .keys(doc! { "recipeId": 1 })
            .build();

        match comments.create_index(recipe_index).await {
            Ok(_) => log::info!("   ✅ Index created: comments(recipeId)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/RecipeRoute".to_string());

        let db = MongoDB::new(&uri).await;
        assert!(db.is_ok());
    }

    #[test]
    fn test_database_name_from_uri() {
        // Só a lógica de parsing do nome, sem conectar
        let extract = |uri: &str| {
            uri.split('/')
                .last()
                .and_then(|s| s.split('?').next())
                .filter(|s: &&str| !s.is_empty() && !s.contains(':'))
                .unwrap_or("RecipeRoute")
                .to_string()
        };

        assert_eq!(extract("mongodb://localhost:27017/RecipeRoute"), "RecipeRoute");
        assert_eq!(extract("mongodb://localhost:27017/other?retryWrites=true"), "other");
        assert_eq!(extract("mongodb://localhost:27017"), "RecipeRoute");
    }
}
