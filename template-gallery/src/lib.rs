//! Survey template gallery workflow.
//!
//! This crate implements the logic behind a gallery of survey templates:
//! filtering an immutable catalog, tracking the active template, and turning
//! a confirmed selection into a survey via a pluggable remote backend.
//!
//! It is presentation-agnostic: rendering, routing, and notifications live
//! behind the [`NavigationSink`] and [`NotificationSink`] traits and the
//! [`GallerySnapshot`] the gallery produces; the network lives behind
//! [`CreateSurveyBackend`].

// Re-export all types from template-gallery-types
pub use template_gallery_types::*;

mod catalog;
pub use catalog::Catalog;

mod matcher;
pub use matcher::matching_templates;

mod backend;
pub use backend::{CreateSurveyBackend, NavigationSink, NotificationSink};

mod workflow;
pub use workflow::{CreateOutcome, GallerySnapshot, TemplateGallery, edit_survey_path};

// Test doubles for exercising the workflow without a real server
mod test_backend;
pub use test_backend::{
    RecordedRequest, RecordingNavigator, RecordingNotifier, TestBackend, TestBackendError,
};
