use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A book row.
///
/// `id` is `None` until the record has been persisted by
/// [`BookStore::add`](crate::store::BookStore::add).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
}

impl Book {
    /// Builds a transient book that has not been stored yet.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self { id: None, title: title.into(), author: author.into() }
    }
}

/// Fields accepted by the create and update endpoints.
///
/// Falsy values are dropped: a missing key, `null`, `false`, `0`, `""`, arrays
/// and objects all end up as `None`. Other scalars keep their textual form, so
/// `1984` becomes `"1984"` and `true` becomes `"1"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPayload {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl BookPayload {
    /// Parses a raw request body. Anything that is not a JSON object is treated as `{}`.
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(e) => {
                if !body.is_empty() {
                    tracing::debug!("Ignoring malformed JSON body: {}", e);
                }
                return Self::default();
            }
        };
        Self { title: non_empty_field(&value, "title"), author: non_empty_field(&value, "author") }
    }
}

fn non_empty_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        _ => None,
    }
}

/// Optional pagination for the list endpoint.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}
