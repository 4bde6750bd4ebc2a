use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ParseClassificationError, ProductIndustry, SurveyChannel, TemplateRole};

/// A single filter criterion chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum TemplateFilter {
    /// Restrict to templates supporting a delivery channel.
    Channel(SurveyChannel),
    /// Restrict to templates tagged for an industry.
    Industry(ProductIndustry),
    /// Restrict to templates aimed at a role.
    Role(TemplateRole),
}

impl FromStr for TemplateFilter {
    type Err = ParseClassificationError;

    /// Parse a bare wire string into whichever filter dimension it names.
    ///
    /// The three wire vocabularies are disjoint, so a bare string is
    /// unambiguous. Used for pre-applied filters handed over by the host as
    /// raw strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(channel) = s.parse::<SurveyChannel>() {
            return Ok(Self::Channel(channel));
        }
        if let Ok(industry) = s.parse::<ProductIndustry>() {
            return Ok(Self::Industry(industry));
        }
        if let Ok(role) = s.parse::<TemplateRole>() {
            return Ok(Self::Role(role));
        }
        Err(ParseClassificationError {
            kind: "filter",
            value: s.to_string(),
        })
    }
}

/// The set of filter criteria currently applied to the gallery.
///
/// Holds at most one constraint per dimension. An absent constraint means
/// "no opinion", which is distinct from a constraint that no template happens
/// to match. A new selection replaces the old one wholesale; selections are
/// never merged.
///
/// Raw host-supplied entries that fail shape validation are retained as
/// *malformed*; the filter engine fails open (matches everything) while any
/// are present. See the filter engine documentation for that policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    channel: Option<SurveyChannel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    industry: Option<ProductIndustry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<TemplateRole>,

    /// Raw entries that failed shape validation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    malformed: Vec<String>,
}

impl FilterSelection {
    /// Create an unconstrained selection.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a selection from well-typed filters.
    ///
    /// Later entries of the same dimension win, matching "new selection
    /// replaces old".
    pub fn from_filters(filters: impl IntoIterator<Item = TemplateFilter>) -> Self {
        let mut selection = Self::none();
        for filter in filters {
            selection.apply(filter);
        }
        selection
    }

    /// Build a selection from raw host-supplied strings.
    ///
    /// Entries that fail to parse are retained as malformed and trigger the
    /// fail-open policy in the filter engine.
    pub fn from_raw<S: AsRef<str>>(entries: impl IntoIterator<Item = S>) -> Self {
        let mut selection = Self::none();
        for entry in entries {
            let entry = entry.as_ref();
            match entry.parse::<TemplateFilter>() {
                Ok(filter) => selection.apply(filter),
                Err(_) => selection.malformed.push(entry.to_string()),
            }
        }
        selection
    }

    /// Apply a single filter, replacing any prior constraint of the same
    /// dimension.
    pub fn apply(&mut self, filter: TemplateFilter) {
        match filter {
            TemplateFilter::Channel(channel) => self.channel = Some(channel),
            TemplateFilter::Industry(industry) => self.industry = Some(industry),
            TemplateFilter::Role(role) => self.role = Some(role),
        }
    }

    /// Set the channel constraint.
    pub fn with_channel(mut self, channel: SurveyChannel) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Set the industry constraint.
    pub fn with_industry(mut self, industry: ProductIndustry) -> Self {
        self.industry = Some(industry);
        self
    }

    /// Set the role constraint.
    pub fn with_role(mut self, role: TemplateRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Get the channel constraint, if any.
    pub fn channel(&self) -> Option<SurveyChannel> {
        self.channel
    }

    /// Get the industry constraint, if any.
    pub fn industry(&self) -> Option<ProductIndustry> {
        self.industry
    }

    /// Get the role constraint, if any.
    pub fn role(&self) -> Option<TemplateRole> {
        self.role
    }

    /// The raw entries that failed shape validation.
    pub fn malformed(&self) -> &[String] {
        &self.malformed
    }

    /// Check whether any raw entry failed shape validation.
    pub fn has_malformed(&self) -> bool {
        !self.malformed.is_empty()
    }

    /// Check whether no constraint is set at all.
    pub fn is_unconstrained(&self) -> bool {
        self.channel.is_none()
            && self.industry.is_none()
            && self.role.is_none()
            && self.malformed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_filter_strings() {
        assert_eq!(
            "app".parse::<TemplateFilter>().unwrap(),
            TemplateFilter::Channel(SurveyChannel::App)
        );
        assert_eq!(
            "eCommerce".parse::<TemplateFilter>().unwrap(),
            TemplateFilter::Industry(ProductIndustry::ECommerce)
        );
        assert_eq!(
            "sales".parse::<TemplateFilter>().unwrap(),
            TemplateFilter::Role(TemplateRole::Sales)
        );
        assert!("carrier-pigeon".parse::<TemplateFilter>().is_err());
    }

    #[test]
    fn later_filter_of_same_dimension_wins() {
        let selection = FilterSelection::from_filters([
            TemplateFilter::Channel(SurveyChannel::Link),
            TemplateFilter::Channel(SurveyChannel::App),
        ]);
        assert_eq!(selection.channel(), Some(SurveyChannel::App));
    }

    #[test]
    fn from_raw_keeps_malformed_entries() {
        let selection = FilterSelection::from_raw(["app", "smoke-signal"]);
        assert_eq!(selection.channel(), Some(SurveyChannel::App));
        assert_eq!(selection.malformed(), ["smoke-signal"]);
        assert!(selection.has_malformed());
        assert!(!selection.is_unconstrained());
    }

    #[test]
    fn none_is_unconstrained() {
        assert!(FilterSelection::none().is_unconstrained());
    }
}
