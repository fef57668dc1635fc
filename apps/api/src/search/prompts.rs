// All LLM prompt constants for the job search endpoint.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{JSON_ARRAY_ONLY, NO_MARKDOWN_RULE};
use crate::search::query::SearchQuery;

/// System prompt for job sourcing, before the JSON-only fragment is appended.
const SEARCH_SYSTEM_PREFIX: &str = "Du bist ein Schweizer Job-Sourcing-Agent. \
    Du suchst NUR in der Schweiz nach aktuellen Stellenangeboten \
    (jobs.ch, jobup.ch, indeed.ch, etc.).";

/// Job search prompt template.
/// Replace: {role}, {city}, {radius}, {no_markdown_rule}
pub const SEARCH_PROMPT_TEMPLATE: &str = r#"Parameter:
Rolle: {role}
Stadt: {city}
Radius: {radius} km

Bitte gib mir eine Liste von passenden Schweizer Stelleninseraten im folgenden Format (ohne Erklärtext, nur JSON):
[
  {
    "id": "web_1",
    "title": "Elektriker EFZ",
    "company": "Elektro Basel AG",
    "location": {
      "city": "Basel",
      "country": "CH"
    },
    "required_skills": ["EFZ", "Schaltschränke", "KNX"],
    "nice_skills": ["PV"],
    "min_experience_years": 2,
    "languages": [{"code": "de", "level": "B2"}],
    "driver_license_required": true,
    "description": "Kurzbeschreibung der Aufgabe / Verantwortung (max 300 Zeichen)",
    "canton": "BS",
    "url": "https://example.com/job-12345"
  }
]

REGELN:
- country MUSS immer "CH" sein.
- url MUSS die Originalausschreibung sein.
- description max. 300 Zeichen.
{no_markdown_rule}"#;

/// The system/user pair sent to the model for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPrompts {
    pub system: String,
    pub user: String,
}

/// Renders the prompts for `query`. Parameters are embedded verbatim, unescaped.
pub fn build_search_prompts(query: &SearchQuery) -> SearchPrompts {
    let user = render(
        SEARCH_PROMPT_TEMPLATE,
        &[
            ("role", query.role.as_str()),
            ("city", query.city.as_str()),
            ("radius", query.radius.as_str()),
            ("no_markdown_rule", NO_MARKDOWN_RULE),
        ],
    );

    SearchPrompts {
        system: format!("{SEARCH_SYSTEM_PREFIX} {JSON_ARRAY_ONLY}"),
        user,
    }
}

/// Single-pass `{name}` substitution. Substituted text is never rescanned, and
/// braces that do not name a known placeholder are copied through.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let hit = vars.iter().find(|(name, _)| {
            tail.strip_prefix(*name)
                .is_some_and(|after| after.starts_with('}'))
        });
        match hit {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
