//! Search query extraction — turns a raw request body into a `SearchQuery`.

use serde_json::{Map, Value};
use thiserror::Error;

pub const DEFAULT_ROLE: &str = "Elektriker EFZ";
pub const DEFAULT_CITY: &str = "Basel";
pub const DEFAULT_RADIUS_KM: &str = "20";

/// The three caller parameters of a job search, already rendered as prompt text.
/// Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub role: String,
    pub city: String,
    /// Kilometres around `city`. Not validated: any JSON value is rendered as given.
    pub radius: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            role: DEFAULT_ROLE.to_string(),
            city: DEFAULT_CITY.to_string(),
            radius: DEFAULT_RADIUS_KM.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("Request-Body ist kein valides JSON: {0}")]
    InvalidJson(String),

    #[error("Request-Body muss ein JSON-Objekt sein")]
    NotAnObject,
}

impl SearchQuery {
    /// Parses a request body.
    ///
    /// An empty body, a missing field and an explicit `null` all fall back to the
    /// defaults. Only malformed JSON or a non-object body is rejected; field
    /// values of any type are rendered as text.
    pub fn from_body(body: &[u8]) -> Result<Self, QueryError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value =
            serde_json::from_slice(body).map_err(|e| QueryError::InvalidJson(e.to_string()))?;

        match value {
            Value::Object(fields) => Ok(Self::from_fields(&fields)),
            _ => Err(QueryError::NotAnObject),
        }
    }

    fn from_fields(fields: &Map<String, Value>) -> Self {
        let defaults = Self::default();

        Self {
            role: field_text(fields, "role").unwrap_or(defaults.role),
            city: field_text(fields, "city").unwrap_or(defaults.city),
            radius: field_text(fields, "radius").unwrap_or(defaults.radius),
        }
    }
}

/// Strings are taken unquoted; other values use their compact JSON form.
fn field_text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
