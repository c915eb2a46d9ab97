use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::{Collection, error::Error};

/// Name of the MongoDB collection holding status check documents.
pub const STATUS_CHECKS_COLLECTION: &str = "status_checks";

/// # Record Store Accessor
///
/// Thin facade over the status check document collection. Two operations
/// only: insert one fully-formed document, and list every document (capped)
/// with the store's internal `_id` field projected out.
///
/// Errors are propagated untouched; there is no retry layer. Single-document
/// operations only, so no transactions or locking.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Writes one new document. The caller is responsible for having
    /// converted any temporal fields to their ISO-8601 string form.
    async fn insert(&self, document: Document) -> Result<(), Error>;

    /// Returns up to `limit` documents in the store's natural order, with
    /// the internal `_id` field excluded. An empty store yields an empty
    /// vector, not an error.
    async fn list_all(&self, limit: i64) -> Result<Vec<Document>, Error>;
}

/// [`StatusStore`] backed by a MongoDB collection.
pub struct MongoStatusStore {
    collection: Collection<Document>,
}

impl MongoStatusStore {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl StatusStore for MongoStatusStore {
    async fn insert(&self, document: Document) -> Result<(), Error> {
        self.collection.insert_one(document).await?;
        Ok(())
    }

    async fn list_all(&self, limit: i64) -> Result<Vec<Document>, Error> {
        self.collection
            .find(doc! {})
            .projection(doc! { "_id": 0 })
            .limit(limit)
            .await?
            .try_collect()
            .await
    }
}
