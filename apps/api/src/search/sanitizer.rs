//! Response sanitizer — validates model output and normalizes each posting.
//!
//! The model is not a trusted source. Its text must be a bare JSON array of
//! objects; each object is then reshaped in place:
//! 1. `description` trimmed and cut to 300 characters (missing → `""`)
//! 2. `id` synthesized as `web_{n}` (1-based) when absent
//! 3. country fields forced to "CH"
//!
//! Element order and all other fields are preserved.

use serde_json::Value;
use thiserror::Error;

use crate::models::job_posting::JobPosting;

#[derive(Debug, Error)]
pub enum SanitizeError {
    #[error("response does not start with '['")]
    NotAnArrayPrefix { raw: String },

    #[error("response is not valid JSON: {source}")]
    InvalidJson {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("element {position} is not a JSON object")]
    NotAnObject { raw: String, position: usize },
}

impl SanitizeError {
    /// The unmodified model output, for surfacing to the caller.
    pub fn raw(&self) -> &str {
        match self {
            SanitizeError::NotAnArrayPrefix { raw }
            | SanitizeError::InvalidJson { raw, .. }
            | SanitizeError::NotAnObject { raw, .. } => raw,
        }
    }
}

/// Parses `raw` as a JSON array of postings and normalizes every element.
pub fn sanitize_postings(raw: &str) -> Result<Vec<JobPosting>, SanitizeError> {
    if !raw.trim_start().starts_with('[') {
        return Err(SanitizeError::NotAnArrayPrefix {
            raw: raw.to_string(),
        });
    }

    // Past the prefix check, valid JSON can only be an array.
    let elements: Vec<Value> =
        serde_json::from_str(raw).map_err(|source| SanitizeError::InvalidJson {
            raw: raw.to_string(),
            source,
        })?;

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            let position = index + 1;
            match element {
                Value::Object(fields) => Ok(normalize(JobPosting::new(fields), position)),
                _ => Err(SanitizeError::NotAnObject {
                    raw: raw.to_string(),
                    position,
                }),
            }
        })
        .collect()
}

fn normalize(mut posting: JobPosting, position: usize) -> JobPosting {
    posting.clamp_description();
    posting.ensure_id(position);
    posting.force_swiss_country();
    posting
}
