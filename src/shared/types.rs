use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// One database record: column name mapped to its JSON value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct Row(pub Map<String, Value>);

/// Uniform body of every failed response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Error kind, e.g. `BadRequest` or `DatabaseError`
    #[schema(example = "BadRequest")]
    pub error: String,
    pub message: String,
    #[schema(example = "2026-01-01T00:00:00.000Z")]
    pub timestamp: String,
}

impl ErrorEnvelope {
    pub fn new(kind: &str, message: impl Into<String>) -> Self {
        Self {
            error: kind.to_string(),
            message: message.into(),
            timestamp: timestamp_now(),
        }
    }
}

/// Current UTC time as RFC 3339 with millisecond precision
pub fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
