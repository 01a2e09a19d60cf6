//! Firestore REST client — the document-store backend for interview records.
//!
//! Documents are created with `POST .../documents/{collection}` so Firestore
//! assigns the document id. Writes are append-only: nothing in this service
//! updates or deletes a document after creation.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;

const FIRESTORE_API_URL: &str = "https://firestore.googleapis.com/v1";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed store response: {0}")]
    MalformedResponse(String),
}

/// The seam between handlers and the document database.
/// Carried in `AppState` as `Arc<dyn DocumentStore>` so tests can inject a mock.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Appends `document` to the named collection and returns the assigned
    /// document id. No uniqueness check and no idempotency key: retrying the
    /// same logical request produces a duplicate document.
    async fn add_document(&self, collection: &str, document: &Value) -> Result<String, AppError>;
}

/// Firestore-backed document store.
#[derive(Clone)]
pub struct FirestoreClient {
    client: Client,
    project_id: String,
    bearer_token: String,
}

impl FirestoreClient {
    pub fn new(project_id: String, bearer_token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            project_id,
            bearer_token,
        }
    }

    async fn create_document(&self, collection: &str, document: &Value) -> Result<String, StoreError> {
        let url = format!(
            "{FIRESTORE_API_URL}/projects/{}/databases/(default)/documents/{collection}",
            self.project_id
        );

        let body = json!({ "fields": to_firestore_fields(document) });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.bearer_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let created: Value = response.json().await?;
        // Response `name` is the full resource path; the id is its last segment.
        let doc_id = created
            .get("name")
            .and_then(Value::as_str)
            .and_then(|name| name.rsplit('/').next())
            .ok_or_else(|| StoreError::MalformedResponse("missing document name".to_string()))?
            .to_string();

        debug!("Created document {doc_id} in collection {collection}");
        Ok(doc_id)
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn add_document(&self, collection: &str, document: &Value) -> Result<String, AppError> {
        self.create_document(collection, document)
            .await
            .map_err(|e| AppError::Store(e.to_string()))
    }
}

/// Encodes a JSON object into Firestore's `fields` map.
/// Non-object inputs encode as an empty map; records are always objects here.
pub fn to_firestore_fields(document: &Value) -> Value {
    let mut fields = Map::new();
    if let Some(map) = document.as_object() {
        for (key, value) in map {
            fields.insert(key.clone(), to_firestore_value(value));
        }
    }
    Value::Object(fields)
}

/// Encodes a single JSON value into Firestore's typed value format.
fn to_firestore_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            // Firestore represents integers as decimal strings.
            if let Some(i) = n.as_i64() {
                json!({ "integerValue": i.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(to_firestore_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(_) => json!({ "mapValue": { "fields": to_firestore_fields(value) } }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_flat_record() {
        let doc = json!({
            "role": "backend",
            "finalized": true,
            "amount": "5"
        });
        let fields = to_firestore_fields(&doc);
        assert_eq!(fields["role"], json!({ "stringValue": "backend" }));
        assert_eq!(fields["finalized"], json!({ "booleanValue": true }));
        assert_eq!(fields["amount"], json!({ "stringValue": "5" }));
    }

    #[test]
    fn test_encode_string_array() {
        let doc = json!({ "techstack": ["Rust", "Postgres"] });
        let fields = to_firestore_fields(&doc);
        assert_eq!(
            fields["techstack"],
            json!({ "arrayValue": { "values": [
                { "stringValue": "Rust" },
                { "stringValue": "Postgres" }
            ]}})
        );
    }

    #[test]
    fn test_encode_numbers_and_null() {
        let doc = json!({ "count": 3, "score": 0.5, "missing": null });
        let fields = to_firestore_fields(&doc);
        assert_eq!(fields["count"], json!({ "integerValue": "3" }));
        assert_eq!(fields["score"], json!({ "doubleValue": 0.5 }));
        assert_eq!(fields["missing"], json!({ "nullValue": null }));
    }

    #[test]
    fn test_encode_nested_object() {
        let doc = json!({ "meta": { "source": "voice" } });
        let fields = to_firestore_fields(&doc);
        assert_eq!(
            fields["meta"],
            json!({ "mapValue": { "fields": { "source": { "stringValue": "voice" } } } })
        );
    }
}
