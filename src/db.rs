use crate::models::{RecipeDocument, RecipeUpdate};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_document};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use thiserror::Error;

const RECIPES_COLLECTION: &str = "recipes";

/// Errors surfaced by a recipe store. Handlers collapse every variant into a
/// generic 500; the distinction exists for logs, not for clients.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid recipe id: {0}")]
    InvalidId(#[from] mongodb::bson::oid::Error),
    #[error("failed to serialize update: {0}")]
    Bson(#[from] mongodb::bson::ser::Error),
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

/// Data access for the recipe collection. Handlers hold this as a trait
/// object so tests can substitute an in-memory store.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Insert a new recipe and return it with its assigned id.
    async fn insert(&self, recipe: RecipeDocument) -> Result<RecipeDocument, StoreError>;

    /// All recipes, in store order.
    async fn list(&self) -> Result<Vec<RecipeDocument>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<RecipeDocument>, StoreError>;

    /// Apply the submitted fields and return the post-update state, or None
    /// if no recipe has this id.
    async fn update_by_id(
        &self,
        id: &str,
        changes: RecipeUpdate,
    ) -> Result<Option<RecipeDocument>, StoreError>;

    /// Remove the recipe, returning the removed document if it existed.
    async fn delete_by_id(&self, id: &str) -> Result<Option<RecipeDocument>, StoreError>;
}

/// MongoDB-backed implementation of [`RecipeStore`].
pub struct MongoRecipeStore {
    recipes: Collection<RecipeDocument>,
}

impl MongoRecipeStore {
    /// Build the client and spawn a connectivity probe. The client connects
    /// lazily, so requests arriving before the first successful handshake
    /// simply fail at the store call.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(db_name);

        let ping_db = database.clone();
        tokio::spawn(async move {
            match ping_db.run_command(doc! { "ping": 1 }).await {
                Ok(_) => tracing::info!("Connected to MongoDB, database name: {:?}", ping_db.name()),
                Err(e) => tracing::error!("Error connecting to MongoDB: {}", e),
            }
        });

        Ok(Self {
            recipes: database.collection::<RecipeDocument>(RECIPES_COLLECTION),
        })
    }
}

#[async_trait]
impl RecipeStore for MongoRecipeStore {
    async fn insert(&self, mut recipe: RecipeDocument) -> Result<RecipeDocument, StoreError> {
        let result = self.recipes.insert_one(&recipe).await?;
        recipe.id = result.inserted_id.as_object_id();
        Ok(recipe)
    }

    async fn list(&self) -> Result<Vec<RecipeDocument>, StoreError> {
        let cursor = self.recipes.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<RecipeDocument>, StoreError> {
        let oid = ObjectId::parse_str(id)?;
        Ok(self.recipes.find_one(doc! { "_id": oid }).await?)
    }

    async fn update_by_id(
        &self,
        id: &str,
        changes: RecipeUpdate,
    ) -> Result<Option<RecipeDocument>, StoreError> {
        let oid = ObjectId::parse_str(id)?;
        let fields = to_document(&changes)?;

        // The server rejects an empty $set; an update with no submitted
        // fields is a plain read.
        if fields.is_empty() {
            return Ok(self.recipes.find_one(doc! { "_id": oid }).await?);
        }

        Ok(self
            .recipes
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<RecipeDocument>, StoreError> {
        let oid = ObjectId::parse_str(id)?;
        Ok(self.recipes.find_one_and_delete(doc! { "_id": oid }).await?)
    }
}
