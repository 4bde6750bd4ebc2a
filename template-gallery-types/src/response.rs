use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fallback message when a failed response carries no usable detail.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong, please try again later.";

/// The survey reference returned by a successful create call.
///
/// Only the identifier is interpreted; any other fields the server returns
/// are carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedSurvey {
    /// Identifier of the newly created survey.
    pub id: String,

    /// Everything else the server included.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreatedSurvey {
    /// Create a reference carrying only an identifier.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra: Map::new(),
        }
    }
}

/// The result structure of the remote create operation.
///
/// A response either carries `data` (success) or describes the failure via
/// `server_error` and/or per-field `validation_errors`. A response with
/// neither is malformed; [`Self::formatted_error_message`] still produces
/// something displayable for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSurveyResponse {
    /// The created survey, on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CreatedSurvey>,

    /// A server-side failure description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_error: Option<String>,

    /// Per-field validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<BTreeMap<String, Vec<String>>>,
}

impl CreateSurveyResponse {
    /// A successful response carrying the given survey id.
    pub fn created(id: impl Into<String>) -> Self {
        Self {
            data: Some(CreatedSurvey::with_id(id)),
            ..Self::default()
        }
    }

    /// A failed response with a server error message.
    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            server_error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Extract the best available error message for user display.
    ///
    /// Preference order: the server error, then the joined validation
    /// errors, then [`GENERIC_ERROR_MESSAGE`].
    pub fn formatted_error_message(&self) -> String {
        if let Some(message) = &self.server_error {
            return message.clone();
        }
        if let Some(errors) = &self.validation_errors {
            let joined: Vec<String> = errors
                .iter()
                .flat_map(|(field, messages)| {
                    messages.iter().map(move |message| format!("{field}: {message}"))
                })
                .collect();
            if !joined.is_empty() {
                return joined.join("\n");
            }
        }
        GENERIC_ERROR_MESSAGE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_success_payload() {
        let response: CreateSurveyResponse =
            serde_json::from_value(json!({ "data": { "id": "s1", "name": "NPS" } })).unwrap();
        let data = response.data.unwrap();
        assert_eq!(data.id, "s1");
        assert_eq!(data.extra["name"], "NPS");
    }

    #[test]
    fn server_error_wins() {
        let mut errors = BTreeMap::new();
        errors.insert("name".to_string(), vec!["too short".to_string()]);
        let response = CreateSurveyResponse {
            server_error: Some("boom".to_string()),
            validation_errors: Some(errors),
            ..CreateSurveyResponse::default()
        };
        assert_eq!(response.formatted_error_message(), "boom");
    }

    #[test]
    fn validation_errors_are_joined() {
        let mut errors = BTreeMap::new();
        errors.insert("name".to_string(), vec!["required".to_string()]);
        errors.insert("questions".to_string(), vec!["at least one".to_string()]);
        let response = CreateSurveyResponse {
            validation_errors: Some(errors),
            ..CreateSurveyResponse::default()
        };
        let message = response.formatted_error_message();
        assert!(message.contains("name: required"));
        assert!(message.contains("questions: at least one"));
    }

    #[test]
    fn empty_response_falls_back_to_generic_message() {
        let response = CreateSurveyResponse::default();
        assert_eq!(response.formatted_error_message(), GENERIC_ERROR_MESSAGE);
    }
}
