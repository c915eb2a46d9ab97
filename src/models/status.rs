use chrono::{DateTime, Utc};
use mongodb::bson::{Bson, Document, doc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ApiError;

/// # Status Check Record
///
/// One record per status check reported by a client. `id` and `timestamp`
/// are server-generated at creation and immutable; records are never
/// updated or deleted once written.
///
/// ## Fields
/// - `id`: randomly generated UUID string; uniqueness is probabilistic, the
///   store enforces no constraint
/// - `client_name`: caller-supplied name, stored verbatim
/// - `timestamp`: UTC creation time; persisted as an ISO-8601 string
///
/// ## Example JSON
/// ```json
/// {
///   "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
///   "client_name": "alice",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

/// Request body for creating a status check. `id` and `timestamp` are
/// server-generated and never accepted from the client.
#[derive(Deserialize, Debug, ToSchema)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

impl StatusCheck {
    /// Builds a fresh record for `client_name` with a newly generated id and
    /// the current UTC time. The only construction path; there are no
    /// implicit defaults.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.into(),
            timestamp: Utc::now(),
        }
    }

    /// Converts the record into its stored document form. The timestamp
    /// becomes an ISO-8601 string because the collection has no native
    /// temporal binding configured.
    pub fn to_document(&self) -> Document {
        doc! {
            "id": &self.id,
            "client_name": &self.client_name,
            "timestamp": self.timestamp.to_rfc3339(),
        }
    }

    /// Reconstitutes a record from its stored document form.
    ///
    /// Timestamps written by this service are ISO-8601 strings (see
    /// [`Self::to_document`]), but documents written by other tooling may
    /// carry a native BSON datetime instead; both shapes are accepted. Any
    /// other timestamp type, or a missing field, is a malformed document.
    pub fn from_document(document: &Document) -> Result<Self, ApiError> {
        let id = get_string(document, "id")?;
        let client_name = get_string(document, "client_name")?;

        let timestamp = match document.get("timestamp") {
            Some(Bson::String(raw)) => DateTime::parse_from_rfc3339(raw)
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|e| {
                    ApiError::Malformed(format!("unparseable timestamp {raw:?}: {e}"))
                })?,
            Some(Bson::DateTime(native)) => {
                DateTime::from_timestamp_millis(native.timestamp_millis())
                    .ok_or_else(|| ApiError::Malformed("timestamp out of range".to_string()))?
            }
            other => {
                return Err(ApiError::Malformed(format!(
                    "missing or non-temporal timestamp field: {other:?}"
                )));
            }
        };

        Ok(Self {
            id,
            client_name,
            timestamp,
        })
    }
}

fn get_string(document: &Document, field: &str) -> Result<String, ApiError> {
    document
        .get_str(field)
        .map(str::to_string)
        .map_err(|_| ApiError::Malformed(format!("missing or non-string {field} field")))
}
