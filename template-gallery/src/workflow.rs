//! The gallery workflow: selection state and the creation orchestrator.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use template_gallery_types::{
    CreateSurveyError, FilterSelection, SessionContext, SurveyChannel, TemplateRecord,
};

use crate::{Catalog, CreateSurveyBackend, NavigationSink, NotificationSink, matching_templates};

/// Build the edit-view destination path for a newly created survey.
pub fn edit_survey_path(environment_id: &str, survey_id: &str) -> String {
    format!("/environments/{environment_id}/surveys/{survey_id}/edit")
}

/// The terminal result of one creation attempt.
#[derive(Debug)]
pub enum CreateOutcome {
    /// The survey was created; navigation to its edit view was requested.
    Created {
        /// Identifier returned by the backend.
        survey_id: String,
        /// The navigation destination that was requested.
        destination: String,
    },

    /// The attempt failed; the error was logged and reported to the user.
    Rejected(CreateSurveyError),

    /// Another attempt was still in flight; nothing was dispatched.
    AlreadyInFlight,
}

impl CreateOutcome {
    /// Check if the attempt succeeded.
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }

    /// The error of a rejected attempt, if any.
    pub fn error(&self) -> Option<&CreateSurveyError> {
        match self {
            Self::Rejected(error) => Some(error),
            _ => None,
        }
    }
}

/// Everything the presentation surface needs to render the gallery.
#[derive(Debug)]
pub struct GallerySnapshot<'a> {
    /// Templates matching the current filters and search, in catalog order.
    pub templates: Vec<&'a TemplateRecord>,

    /// The active (highlighted) template, if any.
    pub active: Option<&'a TemplateRecord>,

    /// Whether a creation attempt is currently in flight. The surface is
    /// expected to disable submission controls while this is true.
    pub in_flight: bool,

    /// The current filter selection.
    pub filters: &'a FilterSelection,
}

/// Scoped hold on the in-flight flag; released on drop, on every path.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    /// Try to take the flag. `None` means an attempt is already in flight.
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// The template gallery: catalog, filter state, selection state, and the
/// survey-creation orchestrator.
///
/// Selection and filtering are synchronous and safe to re-run on every state
/// change. [`Self::create_survey`] is the sole suspension point; at most one
/// attempt may be outstanding at a time, enforced by an in-flight flag that
/// is released on every path.
pub struct TemplateGallery<B> {
    catalog: Catalog,
    session: SessionContext,
    backend: B,
    navigator: Arc<dyn NavigationSink + Send + Sync>,
    notifier: Arc<dyn NotificationSink + Send + Sync>,
    filters: FilterSelection,
    search: Option<String>,
    active: Option<TemplateRecord>,
    in_flight: AtomicBool,
}

impl<B: CreateSurveyBackend> TemplateGallery<B> {
    /// Create a gallery over the given catalog and session context.
    pub fn new(
        catalog: Catalog,
        session: SessionContext,
        backend: B,
        navigator: Arc<dyn NavigationSink + Send + Sync>,
        notifier: Arc<dyn NotificationSink + Send + Sync>,
    ) -> Self {
        Self {
            catalog,
            session,
            backend,
            navigator,
            notifier,
            filters: FilterSelection::none(),
            search: None,
            active: None,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Apply pre-applied filters supplied by the host.
    pub fn with_filters(mut self, filters: FilterSelection) -> Self {
        self.filters = filters;
        self
    }

    /// Apply a pre-applied search string supplied by the host.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// The catalog this gallery renders.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The backend this gallery dispatches creation requests to.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The current filter selection.
    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    /// Replace the filter selection. Selections are replaced wholesale, never
    /// merged; the active template is deliberately left alone even when the
    /// new filters would exclude it.
    pub fn set_filters(&mut self, filters: FilterSelection) {
        self.filters = filters;
    }

    /// Set or clear the free-text search.
    pub fn set_search(&mut self, search: Option<String>) {
        self.search = search;
    }

    /// Replace the session context, e.g. when the host finishes loading it.
    pub fn set_session(&mut self, session: SessionContext) {
        self.session = session;
    }

    /// The templates matching the current filters and search, in catalog
    /// order.
    pub fn templates(&self) -> Vec<&TemplateRecord> {
        matching_templates(&self.catalog, &self.filters, self.search.as_deref())
    }

    /// Mark a template as active, silently replacing any prior selection.
    pub fn select(&mut self, template: TemplateRecord) {
        self.active = Some(template);
    }

    /// Clear the active template.
    pub fn clear_selection(&mut self) {
        self.active = None;
    }

    /// The active template, if any.
    pub fn active(&self) -> Option<&TemplateRecord> {
        self.active.as_ref()
    }

    /// Whether a creation attempt is currently in flight.
    pub fn in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// One value with everything the presentation surface consumes.
    pub fn snapshot(&self) -> GallerySnapshot<'_> {
        GallerySnapshot {
            templates: self.templates(),
            active: self.active(),
            in_flight: self.in_flight(),
            filters: &self.filters,
        }
    }

    /// Create a survey from the given template.
    ///
    /// Validates the session context, builds the creation payload from the
    /// template preset, dispatches the backend call, and maps the outcome:
    /// success requests navigation to the new survey's edit view; every
    /// failure is logged, reported through the notification sink, and
    /// returned as [`CreateOutcome::Rejected`]. A call arriving while another
    /// attempt is in flight returns [`CreateOutcome::AlreadyInFlight`]
    /// without dispatching anything. No retry is performed.
    pub async fn create_survey(&self, template: &TemplateRecord) -> CreateOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!(
                template = template.name(),
                "creation attempt already in flight, refusing re-entry"
            );
            return CreateOutcome::AlreadyInFlight;
        };

        match self.dispatch(template).await {
            Ok((survey_id, destination)) => {
                tracing::info!(survey_id = %survey_id, destination = %destination, "survey created");
                self.navigator.navigate(&destination);
                CreateOutcome::Created {
                    survey_id,
                    destination,
                }
            }
            Err(error) => {
                tracing::error!(
                    template = template.name(),
                    error = ?error,
                    "survey creation failed"
                );
                self.notifier.error(&error.to_string());
                CreateOutcome::Rejected(error)
            }
        }
    }

    async fn dispatch(&self, template: &TemplateRecord) -> Result<(String, String), CreateSurveyError> {
        // Precondition order matters: product config, then user, then
        // environment, each short-circuiting before the network is touched.
        let product = self
            .session
            .product_config()
            .ok_or(CreateSurveyError::MissingProductConfig)?;
        let user_id = self.session.user_id().ok_or(CreateSurveyError::MissingUser)?;
        let environment_id = self
            .session
            .environment_id()
            .ok_or(CreateSurveyError::MissingEnvironment)?;

        let survey_type = product.channel.unwrap_or(SurveyChannel::Link);
        let body = template.preset().survey_body(survey_type, user_id);

        tracing::debug!(
            template = template.name(),
            survey_type = %survey_type,
            environment_id,
            "dispatching create request"
        );

        let response = self
            .backend
            .create_survey(environment_id, &body)
            .await
            .map_err(CreateSurveyError::remote)?;

        match response.data {
            Some(created) => {
                let destination = edit_survey_path(environment_id, &created.id);
                Ok((created.id, destination))
            }
            None => Err(CreateSurveyError::MalformedResponse {
                message: response.formatted_error_message(),
            }),
        }
    }
}
