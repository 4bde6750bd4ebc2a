//! Walks the whole gallery flow against an in-memory backend: filter the
//! builtin catalog, search it, select a template, and create a survey.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use template_gallery::{
    Catalog, CreateSurveyBackend, CreateSurveyResponse, FilterSelection, NavigationSink,
    NotificationSink, ProductConfig, SessionContext, SurveyChannel, TemplateGallery,
};

/// A backend that "persists" surveys by handing out sequential ids.
#[derive(Default)]
struct InMemoryBackend {
    next_id: AtomicUsize,
}

#[async_trait]
impl CreateSurveyBackend for InMemoryBackend {
    type Error = std::convert::Infallible;

    async fn create_survey(
        &self,
        environment_id: &str,
        survey_body: &Value,
    ) -> Result<CreateSurveyResponse, Self::Error> {
        let id = self.next_id.fetch_add(1, Ordering::AcqRel);
        tracing::info!(
            environment_id,
            name = %survey_body["name"],
            "storing survey"
        );
        Ok(CreateSurveyResponse::created(format!("survey-{id}")))
    }
}

struct PrintlnNavigator;

impl NavigationSink for PrintlnNavigator {
    fn navigate(&self, path: &str) {
        println!("-> navigating to {path}");
    }
}

struct PrintlnNotifier;

impl NotificationSink for PrintlnNotifier {
    fn error(&self, message: &str) {
        println!("!! {message}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let session = SessionContext::new()
        .with_user("demo-user")
        .with_environment("demo-env")
        .with_product_config(ProductConfig::new().with_channel(SurveyChannel::App));

    let mut gallery = TemplateGallery::new(
        Catalog::builtin(),
        session,
        InMemoryBackend::default(),
        Arc::new(PrintlnNavigator),
        Arc::new(PrintlnNotifier),
    );

    println!("=== Full catalog ===");
    for template in gallery.templates() {
        println!("  {}", template.name());
    }

    println!("\n=== Filtered to app channel ===");
    gallery.set_filters(FilterSelection::none().with_channel(SurveyChannel::App));
    for template in gallery.templates() {
        println!("  {}", template.name());
    }

    println!("\n=== Searching for \"net\" ===");
    gallery.set_search(Some("net".to_string()));
    for template in gallery.templates() {
        println!("  {}", template.name());
    }
    gallery.set_search(None);

    let nps = gallery
        .catalog()
        .find("Net Promoter Score (NPS)")
        .expect("builtin catalog ships an NPS template")
        .clone();
    gallery.select(nps);

    println!("\n=== Creating from the active template ===");
    let active = gallery
        .active()
        .expect("a template was just selected")
        .clone();
    let outcome = gallery.create_survey(&active).await;
    println!("outcome: created = {}", outcome.is_created());

    Ok(())
}
