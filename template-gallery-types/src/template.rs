use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{ProductIndustry, SurveyChannel, SurveyPreset, TemplateRole};

/// A reusable, named survey definition with classification tags.
///
/// Records are created once at catalog construction and never mutated.
/// The classification tags are all optional; an *unset* tag (`None`) is
/// distinct from an empty set and is treated leniently by the filter engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Template name; search matching runs against this.
    name: String,

    /// Optional one-line description for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    /// The partial survey definition used to seed creation.
    preset: SurveyPreset,

    /// Delivery channels this template suits, or unset for "any".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    channels: Option<BTreeSet<SurveyChannel>>,

    /// Industries this template suits, or unset for "any".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    industries: Option<BTreeSet<ProductIndustry>>,

    /// The single role this template is aimed at, or unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<TemplateRole>,
}

impl TemplateRecord {
    /// Create a new template with no classification tags.
    pub fn new(name: impl Into<String>, preset: SurveyPreset) -> Self {
        Self {
            name: name.into(),
            description: None,
            preset,
            channels: None,
            industries: None,
            role: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Tag the template with delivery channels.
    pub fn with_channels(mut self, channels: impl IntoIterator<Item = SurveyChannel>) -> Self {
        self.channels = Some(channels.into_iter().collect());
        self
    }

    /// Tag the template with industries.
    pub fn with_industries(mut self, industries: impl IntoIterator<Item = ProductIndustry>) -> Self {
        self.industries = Some(industries.into_iter().collect());
        self
    }

    /// Tag the template with a role.
    pub fn with_role(mut self, role: TemplateRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Get the template name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the preset.
    pub fn preset(&self) -> &SurveyPreset {
        &self.preset
    }

    /// Get the channel tags, or `None` if unset.
    pub fn channels(&self) -> Option<&BTreeSet<SurveyChannel>> {
        self.channels.as_ref()
    }

    /// Get the industry tags, or `None` if unset.
    pub fn industries(&self) -> Option<&BTreeSet<ProductIndustry>> {
        self.industries.as_ref()
    }

    /// Get the role tag, or `None` if unset.
    pub fn role(&self) -> Option<TemplateRole> {
        self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_tags() {
        let template = TemplateRecord::new("NPS", SurveyPreset::empty())
            .with_description("Measure loyalty")
            .with_channels([SurveyChannel::Link, SurveyChannel::App])
            .with_industries([ProductIndustry::Saas])
            .with_role(TemplateRole::ProductManager);

        assert_eq!(template.name(), "NPS");
        assert_eq!(template.description(), Some("Measure loyalty"));
        assert!(template.channels().unwrap().contains(&SurveyChannel::App));
        assert_eq!(template.role(), Some(TemplateRole::ProductManager));
    }

    #[test]
    fn tags_default_to_unset() {
        let template = TemplateRecord::new("blank", SurveyPreset::empty());
        assert!(template.channels().is_none());
        assert!(template.industries().is_none());
        assert!(template.role().is_none());
    }

    #[test]
    fn empty_channel_set_is_not_unset() {
        let template = TemplateRecord::new("picky", SurveyPreset::empty()).with_channels([]);
        let channels = template.channels().unwrap();
        assert!(channels.is_empty());
    }
}
