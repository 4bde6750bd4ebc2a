//! The immutable template catalog.
//!
//! A [`Catalog`] is an ordered, read-only sequence of [`TemplateRecord`]s,
//! fixed at construction. It is an injected dependency of the filter engine
//! and the gallery, so tests can substitute a small hand-built catalog for
//! the ready-made one.

use std::sync::Arc;

use serde_json::{Value, json};
use template_gallery_types::{
    ProductIndustry, SurveyChannel, SurveyPreset, TemplateRecord, TemplateRole,
};

/// An immutable, ordered collection of survey templates.
///
/// Cheap to clone; clones share the underlying records.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Arc<[TemplateRecord]>,
}

impl Catalog {
    /// Create a catalog from the given templates, preserving their order.
    pub fn new(templates: Vec<TemplateRecord>) -> Self {
        Self {
            templates: templates.into(),
        }
    }

    /// The ready-made template set shipped with the library.
    pub fn builtin() -> Self {
        Self::new(builtin_templates())
    }

    /// Get the templates in catalog order.
    pub fn templates(&self) -> &[TemplateRecord] {
        &self.templates
    }

    /// Iterate over the templates in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &TemplateRecord> {
        self.templates.iter()
    }

    /// Find a template by exact name.
    pub fn find(&self, name: &str) -> Option<&TemplateRecord> {
        self.templates.iter().find(|template| template.name() == name)
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the catalog has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl From<Vec<TemplateRecord>> for Catalog {
    fn from(templates: Vec<TemplateRecord>) -> Self {
        Self::new(templates)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TemplateRecord;
    type IntoIter = std::slice::Iter<'a, TemplateRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

// Builtin presets are fixed data and use no reserved field names.
fn preset(value: Value) -> SurveyPreset {
    SurveyPreset::from_value(value).expect("builtin preset is a reserved-field-free object")
}

fn builtin_templates() -> Vec<TemplateRecord> {
    use ProductIndustry::{ECommerce, Other, Saas};
    use SurveyChannel::{App, Link, Website};
    use TemplateRole::{CustomerSuccess, Marketing, ProductManager, Sales};

    vec![
        TemplateRecord::new(
            "Start from scratch",
            preset(json!({
                "name": "New Survey",
                "questions": [{
                    "type": "openText",
                    "headline": "What would you like to know?",
                    "placeholder": "Type your question here...",
                    "required": true,
                }],
            })),
        )
        .with_description("Create a survey from scratch."),
        TemplateRecord::new(
            "Net Promoter Score (NPS)",
            preset(json!({
                "name": "NPS Survey",
                "questions": [{
                    "type": "nps",
                    "headline": "How likely are you to recommend us to a friend or colleague?",
                    "lowerLabel": "Not at all likely",
                    "upperLabel": "Extremely likely",
                    "required": false,
                }],
            })),
        )
        .with_description("Measure the loyalty of your customers.")
        .with_channels([App, Link, Website])
        .with_industries([Saas, ECommerce, Other])
        .with_role(CustomerSuccess),
        TemplateRecord::new(
            "Customer Satisfaction Score (CSAT)",
            preset(json!({
                "name": "CSAT Survey",
                "questions": [{
                    "type": "rating",
                    "scale": "smiley",
                    "range": 5,
                    "headline": "How satisfied are you with your experience?",
                    "required": true,
                }],
            })),
        )
        .with_description("Gauge satisfaction right after an interaction.")
        .with_channels([App, Website])
        .with_industries([Saas, ECommerce])
        .with_role(CustomerSuccess),
        TemplateRecord::new(
            "Churn Survey",
            preset(json!({
                "name": "Churn Survey",
                "questions": [{
                    "type": "multipleChoiceSingle",
                    "headline": "Why did you cancel your subscription?",
                    "choices": [
                        "Difficult to use",
                        "It's too expensive",
                        "I'm missing features",
                        "Poor customer service",
                        "I just didn't need it anymore",
                    ],
                    "required": true,
                }],
            })),
        )
        .with_description("Learn why customers cancel.")
        .with_channels([App, Link])
        .with_industries([Saas])
        .with_role(CustomerSuccess),
        TemplateRecord::new(
            "Product Market Fit (Superhuman)",
            preset(json!({
                "name": "Product Market Fit (Superhuman)",
                "questions": [{
                    "type": "multipleChoiceSingle",
                    "headline": "How disappointed would you be if you could no longer use our product?",
                    "choices": ["Not at all disappointed", "Somewhat disappointed", "Very disappointed"],
                    "required": true,
                }],
            })),
        )
        .with_description("Measure PMF by assessing how disappointed users would be.")
        .with_channels([App, Link])
        .with_industries([Saas])
        .with_role(ProductManager),
        TemplateRecord::new(
            "Onboarding Segmentation",
            preset(json!({
                "name": "Onboarding Segmentation",
                "questions": [{
                    "type": "multipleChoiceSingle",
                    "headline": "What is your role?",
                    "choices": ["Founder", "Executive", "Product Manager", "Product Owner", "Software Engineer"],
                    "required": true,
                }],
            })),
        )
        .with_description("Learn about new sign-ups while they onboard.")
        .with_channels([App])
        .with_industries([Saas])
        .with_role(ProductManager),
        TemplateRecord::new(
            "Improve Trial Conversion",
            preset(json!({
                "name": "Improve Trial Conversion",
                "questions": [{
                    "type": "multipleChoiceSingle",
                    "headline": "How was your trial experience?",
                    "choices": ["Great", "Okay", "Not great"],
                    "required": true,
                }],
            })),
        )
        .with_description("Find out why trial users do not convert.")
        .with_channels([App, Link])
        .with_industries([Saas])
        .with_role(Sales),
        TemplateRecord::new(
            "Marketing Attribution",
            preset(json!({
                "name": "Marketing Attribution",
                "questions": [{
                    "type": "multipleChoiceSingle",
                    "headline": "How did you hear about us first?",
                    "choices": ["Recommendation", "Social Media", "Ads", "Google Search", "In a Podcast"],
                    "required": true,
                }],
            })),
        )
        .with_description("Find out where your sign-ups come from.")
        .with_channels([App, Website, Link])
        .with_industries([Saas, ECommerce])
        .with_role(Marketing),
        TemplateRecord::new(
            "Review Prompt",
            preset(json!({
                "name": "Review Prompt",
                "questions": [{
                    "type": "rating",
                    "scale": "star",
                    "range": 5,
                    "headline": "How do you like our product?",
                    "required": true,
                }],
            })),
        )
        .with_description("Invite users who love your product to review it publicly.")
        .with_channels([Link])
        .with_industries([ECommerce])
        .with_role(Marketing),
    ]
}
