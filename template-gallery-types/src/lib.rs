//! Core types for the template-gallery crate.
//!
//! This crate provides the foundational, presentation-agnostic types for the
//! survey-template gallery:
//! - `TemplateRecord` and `SurveyPreset` - templates and their seed payloads
//! - `SurveyChannel`, `ProductIndustry`, `TemplateRole` - classification tags
//! - `TemplateFilter` and `FilterSelection` - user-chosen filter criteria
//! - `SessionContext` and `ProductConfig` - host-supplied context
//! - `CreateSurveyResponse` - the remote create operation's result shape
//! - `CreateSurveyError` - the workflow error taxonomy

mod classification;
pub use classification::{
    ParseClassificationError, ProductIndustry, SurveyChannel, TemplateRole,
};

mod preset;
pub use preset::{CREATED_BY_FIELD, PresetError, SurveyPreset, TYPE_FIELD};

mod template;
pub use template::TemplateRecord;

mod filter;
pub use filter::{FilterSelection, TemplateFilter};

mod context;
pub use context::{ProductConfig, SessionContext};

mod response;
pub use response::{CreateSurveyResponse, CreatedSurvey, GENERIC_ERROR_MESSAGE};

mod error;
pub use error::CreateSurveyError;
