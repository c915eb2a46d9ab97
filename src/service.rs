use std::sync::Arc;

use crate::error::ApiError;
use crate::models::status::StatusCheck;
use crate::store::StatusStore;

/// Hard cap on the number of records returned by a single listing.
pub const LIST_CAP: i64 = 1000;

/// # Status Check Service
///
/// Coordinates status check creation and listing on top of a
/// [`StatusStore`]. The service owns the (de)serialization policy:
/// timestamps are written as ISO-8601 strings and reconstituted to temporal
/// values on read.
///
/// Both operations are single-shot and stateless; the only shared state is
/// the store handle itself, acquired once at process start.
#[derive(Clone)]
pub struct StatusService {
    store: Arc<dyn StatusStore>,
}

impl StatusService {
    pub fn new(store: Arc<dyn StatusStore>) -> Self {
        Self { store }
    }

    /// Creates and persists one status check for `client_name`.
    ///
    /// The record is returned in its in-memory form (temporal timestamp);
    /// only the stored copy carries the string representation. A store
    /// failure is surfaced untouched, with no retry.
    pub async fn create(&self, client_name: &str) -> Result<StatusCheck, ApiError> {
        let check = StatusCheck::new(client_name);
        self.store.insert(check.to_document()).await?;

        tracing::debug!(id = %check.id, client_name = %check.client_name, "persisted status check");
        Ok(check)
    }

    /// Lists every stored status check in the store's natural order, capped
    /// at [`LIST_CAP`]. An empty store yields an empty vector.
    pub async fn list_all(&self) -> Result<Vec<StatusCheck>, ApiError> {
        let documents = self.store.list_all(LIST_CAP).await?;
        documents.iter().map(StatusCheck::from_document).collect()
    }
}
