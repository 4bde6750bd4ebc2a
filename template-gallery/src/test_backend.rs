//! Test doubles for exercising the gallery without a real server.
//!
//! `TestBackend` answers create calls from a pre-scripted queue and records
//! every request it receives; `RecordingNavigator` and `RecordingNotifier`
//! capture what the gallery sends to its sinks.
//!
//! # Example
//!
//! ```rust,ignore
//! let backend = TestBackend::new().with_created("s1");
//! let navigator = Arc::new(RecordingNavigator::default());
//! let gallery = TemplateGallery::new(
//!     Catalog::builtin(),
//!     SessionContext::placeholder(),
//!     backend,
//!     navigator.clone(),
//!     Arc::new(RecordingNotifier::default()),
//! );
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use template_gallery_types::CreateSurveyResponse;

use crate::{CreateSurveyBackend, NavigationSink, NotificationSink};

/// One create call as the backend received it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// The environment the survey was created in.
    pub environment_id: String,
    /// The full creation payload.
    pub survey_body: Value,
}

/// Error type for [`TestBackend`].
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    /// More create calls arrived than responses were scripted.
    #[error("no scripted response left for create call #{0}")]
    ScriptExhausted(usize),

    /// A scripted transport failure.
    #[error("{0}")]
    Transport(String),
}

/// A backend that returns pre-scripted responses.
///
/// Responses are consumed in the order they were scripted; a call beyond the
/// script fails with [`TestBackendError::ScriptExhausted`].
#[derive(Debug, Default)]
pub struct TestBackend {
    script: Mutex<VecDeque<Result<CreateSurveyResponse, String>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    calls: AtomicUsize,
}

impl TestBackend {
    /// Create a backend with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a full response.
    pub fn with_response(self, response: CreateSurveyResponse) -> Self {
        self.script
            .lock()
            .expect("script lock poisoned")
            .push_back(Ok(response));
        self
    }

    /// Script a successful creation returning the given survey id.
    pub fn with_created(self, id: impl Into<String>) -> Self {
        self.with_response(CreateSurveyResponse::created(id))
    }

    /// Script a response that carries a server error instead of data.
    pub fn with_server_error(self, message: impl Into<String>) -> Self {
        self.with_response(CreateSurveyResponse::server_error(message))
    }

    /// Script a transport-level failure.
    pub fn with_transport_failure(self, message: impl Into<String>) -> Self {
        self.script
            .lock()
            .expect("script lock poisoned")
            .push_back(Err(message.into()));
        self
    }

    /// How many create calls arrived so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Acquire)
    }

    /// The requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

#[async_trait]
impl CreateSurveyBackend for TestBackend {
    type Error = TestBackendError;

    async fn create_survey(
        &self,
        environment_id: &str,
        survey_body: &Value,
    ) -> Result<CreateSurveyResponse, Self::Error> {
        let call = self.calls.fetch_add(1, Ordering::AcqRel);
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(RecordedRequest {
                environment_id: environment_id.to_string(),
                survey_body: survey_body.clone(),
            });

        match self
            .script
            .lock()
            .expect("script lock poisoned")
            .pop_front()
        {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TestBackendError::Transport(message)),
            None => Err(TestBackendError::ScriptExhausted(call)),
        }
    }
}

/// A navigation sink that records every requested destination.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    destinations: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// The destinations requested so far, in order.
    pub fn destinations(&self) -> Vec<String> {
        self.destinations
            .lock()
            .expect("destinations lock poisoned")
            .clone()
    }
}

impl NavigationSink for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.destinations
            .lock()
            .expect("destinations lock poisoned")
            .push(path.to_string());
    }
}

/// A notification sink that records every error message.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// The messages displayed so far, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("messages lock poisoned").clone()
    }
}

impl NotificationSink for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages
            .lock()
            .expect("messages lock poisoned")
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_responses_are_consumed_in_order() {
        let backend = TestBackend::new()
            .with_created("s1")
            .with_server_error("nope");

        let body = serde_json::json!({});
        let first = backend.create_survey("e1", &body).await.unwrap();
        assert_eq!(first.data.unwrap().id, "s1");

        let second = backend.create_survey("e1", &body).await.unwrap();
        assert_eq!(second.server_error.as_deref(), Some("nope"));

        let third = backend.create_survey("e1", &body).await;
        assert!(matches!(third, Err(TestBackendError::ScriptExhausted(2))));

        assert_eq!(backend.calls(), 3);
    }

    #[tokio::test]
    async fn requests_are_recorded() {
        let backend = TestBackend::new().with_created("s1");
        let body = serde_json::json!({ "name": "NPS" });
        backend.create_survey("env-7", &body).await.unwrap();

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].environment_id, "env-7");
        assert_eq!(requests[0].survey_body["name"], "NPS");
    }
}
