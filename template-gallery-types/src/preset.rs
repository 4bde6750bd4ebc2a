use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::SurveyChannel;

/// Field name injected into every creation payload to carry the survey type.
pub const TYPE_FIELD: &str = "type";

/// Field name injected into every creation payload to carry the creator.
pub const CREATED_BY_FIELD: &str = "createdBy";

/// Error type for preset construction.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    /// The preset used a field name reserved for injection at creation time.
    #[error("preset uses reserved field name: {0}")]
    ReservedField(String),

    /// The preset was not a JSON object.
    #[error("preset must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// The partial survey definition embedded in a template.
///
/// A preset is an opaque JSON object used verbatim to seed a new survey,
/// except for two injected fields: [`TYPE_FIELD`] and [`CREATED_BY_FIELD`].
/// Those names are reserved: construction rejects presets that carry them,
/// so a preset field can never collide with an injected one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct SurveyPreset {
    fields: Map<String, Value>,
}

impl SurveyPreset {
    /// Create a preset from a JSON object, rejecting reserved field names.
    pub fn new(fields: Map<String, Value>) -> Result<Self, PresetError> {
        for reserved in [TYPE_FIELD, CREATED_BY_FIELD] {
            if fields.contains_key(reserved) {
                return Err(PresetError::ReservedField(reserved.to_string()));
            }
        }
        Ok(Self { fields })
    }

    /// Create a preset from any JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, PresetError> {
        match value {
            Value::Object(map) => Self::new(map),
            other => Err(PresetError::NotAnObject(json_type_name(&other))),
        }
    }

    /// Create an empty preset.
    pub fn empty() -> Self {
        Self { fields: Map::new() }
    }

    /// Get the preset fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Check if the preset carries no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build the body of a creation request: the preset fields merged with
    /// the injected `type` and `createdBy` fields.
    pub fn survey_body(&self, survey_type: SurveyChannel, created_by: &str) -> Value {
        let mut body = self.fields.clone();
        body.insert(TYPE_FIELD.to_string(), Value::String(survey_type.as_str().to_string()));
        body.insert(CREATED_BY_FIELD.to_string(), Value::String(created_by.to_string()));
        Value::Object(body)
    }
}

impl TryFrom<Map<String, Value>> for SurveyPreset {
    type Error = PresetError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::new(fields)
    }
}

impl From<SurveyPreset> for Map<String, Value> {
    fn from(preset: SurveyPreset) -> Self {
        preset.fields
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
