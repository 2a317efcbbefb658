use serde_json::Value;

use super::union::{lookup, string_or_default};
use crate::models::ProfileSummary;

/// Read a profile field from the top level, falling back to `miniProfile`
///
/// `/me` nests the member's names under `miniProfile`; fully decorated profiles
/// carry them at the top level. The first string found wins.
fn profile_field(raw: &Value, key: &str) -> String {
    let value = raw
        .get(key)
        .filter(|v| v.is_string())
        .or_else(|| lookup(raw, &["miniProfile", key]).filter(|v| v.is_string()));
    string_or_default(value)
}

/// Name and headline for `profile me` text output
///
/// The display name is `"{firstName} {lastName}"` with missing parts empty, so a
/// profile without names renders as a single space. The headline falls back to
/// the mini profile's `occupation`.
pub fn normalize_profile_summary(raw: &Value) -> ProfileSummary {
    let display_name =
        format!("{} {}", profile_field(raw, "firstName"), profile_field(raw, "lastName"));

    let mut headline = profile_field(raw, "headline");
    if headline.is_empty() {
        headline = string_or_default(lookup(raw, &["miniProfile", "occupation"]));
    }

    ProfileSummary { display_name, headline }
}

/// Public identifier of the profile's owner, or `""` when absent
pub fn public_identifier(raw: &Value) -> String {
    profile_field(raw, "publicIdentifier")
}
