use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SWISS_COUNTRY_CODE: &str = "CH";
pub const MAX_DESCRIPTION_CHARS: usize = 300;
pub const FALLBACK_ID_PREFIX: &str = "web_";

/// One job posting as returned by the model.
///
/// Kept as an open JSON object: expected fields are `id`, `title`, `company`,
/// `location {city, country}`, `required_skills`, `nice_skills`,
/// `min_experience_years`, `languages [{code, level}]`,
/// `driver_license_required`, `description`, `canton` and `url`, but anything
/// else the model adds is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobPosting(Map<String, Value>);

impl JobPosting {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Trims the description and hard-cuts it to `MAX_DESCRIPTION_CHARS` characters.
    /// A missing, null or non-string description becomes `""`.
    pub fn clamp_description(&mut self) {
        let description = self
            .0
            .get("description")
            .and_then(Value::as_str)
            .map(|d| d.trim().chars().take(MAX_DESCRIPTION_CHARS).collect::<String>())
            .unwrap_or_default();
        self.0
            .insert("description".to_string(), Value::String(description));
    }

    /// Sets `id` to `web_{position}` unless the key is already present.
    pub fn ensure_id(&mut self, position: usize) {
        self.0
            .entry("id")
            .or_insert_with(|| Value::String(format!("{FALLBACK_ID_PREFIX}{position}")));
    }

    /// Overwrites every country field that is present with "CH".
    /// Covers `location.country` and a flat top-level `country`.
    pub fn force_swiss_country(&mut self) {
        if let Some(Value::Object(location)) = self.0.get_mut("location") {
            location.insert(
                "country".to_string(),
                Value::String(SWISS_COUNTRY_CODE.to_string()),
            );
        }
        if let Some(country) = self.0.get_mut("country") {
            *country = Value::String(SWISS_COUNTRY_CODE.to_string());
        }
    }
}
