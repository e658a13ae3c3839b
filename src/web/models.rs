// Typed request parameters per route.

use serde::Deserialize;

/// Query string for `GET /patients/search`. The parameter is optional; an
/// absent or empty value is treated per [`SearchSettings`].
#[derive(Debug, Deserialize)]
pub struct PatientSearchQuery {
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
}

/// Behavior of the search route for an empty filter, fixed at startup.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// When true (the historical behavior) an empty filter becomes the
    /// pattern `%%` and matches every patient. When false the route answers
    /// with an empty result set without touching the database.
    pub empty_matches_all: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_parameter() {
        let q: PatientSearchQuery = serde_json::from_str(r#"{"firstName":"Jo"}"#).unwrap();
        assert_eq!(q.first_name.as_deref(), Some("Jo"));
    }

    #[test]
    fn missing_parameter_is_none() {
        let q: PatientSearchQuery = serde_json::from_str("{}").unwrap();
        assert!(q.first_name.is_none());
    }
}
