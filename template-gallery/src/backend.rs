//! Trait seams for the gallery's external collaborators.

use async_trait::async_trait;
use serde_json::Value;
use template_gallery_types::CreateSurveyResponse;

/// The remote create operation.
///
/// This is the gallery's single network boundary. Implementations decide the
/// transport; the gallery assumes no retries and no idempotency keys. A
/// transport-level failure surfaces as `Err`; a call that reached the server
/// surfaces as `Ok` with a [`CreateSurveyResponse`], which may still describe
/// a failure.
#[async_trait]
pub trait CreateSurveyBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error> + Send;

    /// Persist a new survey in the given environment.
    ///
    /// `survey_body` is the template preset merged with the injected `type`
    /// and `createdBy` fields.
    async fn create_survey(
        &self,
        environment_id: &str,
        survey_body: &Value,
    ) -> Result<CreateSurveyResponse, Self::Error>;
}

/// Where the gallery sends the user after a successful creation.
///
/// Fire-and-forget; no return value is consumed. If the view is already gone
/// when this fires, discarding the request is fine.
pub trait NavigationSink {
    /// Request navigation to the given destination path.
    fn navigate(&self, path: &str);
}

/// Where the gallery reports user-visible errors.
///
/// Fire-and-forget; no return value is consumed.
pub trait NotificationSink {
    /// Display a short, human-readable error message.
    fn error(&self, message: &str);
}
