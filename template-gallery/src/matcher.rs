//! The filter engine: a pure function from catalog, filter selection, and
//! search text to the ordered subsequence of matching templates.
//!
//! Matching never reorders: output is always in catalog order, and there are
//! no side effects.

use template_gallery_types::{FilterSelection, TemplateRecord};

use crate::Catalog;

/// Compute the templates matching the current selection and search text.
///
/// A non-empty search takes precedence over faceted filtering: the result is
/// every template whose name starts with the search text, compared
/// case-insensitively, and the filter selection is ignored entirely.
///
/// Without a search, a template matches when every constrained dimension
/// accepts it:
/// - a channel or industry constraint accepts templates whose tag set
///   contains the value *or is unset* (unset membership tags are advisory);
/// - a role constraint accepts templates whose role equals the value.
///
/// # Fail-open policy
///
/// If the selection carries any malformed raw entry (a host-supplied filter
/// string that failed shape validation), every template matches. Availability
/// is preferred over strict filtering here: a broken filter handed over by
/// the host should not blank the gallery.
pub fn matching_templates<'a>(
    catalog: &'a Catalog,
    selection: &FilterSelection,
    search: Option<&str>,
) -> Vec<&'a TemplateRecord> {
    if let Some(needle) = search.filter(|s| !s.is_empty()) {
        let needle = needle.to_lowercase();
        return catalog
            .iter()
            .filter(|template| template.name().to_lowercase().starts_with(&needle))
            .collect();
    }

    if selection.has_malformed() {
        return catalog.iter().collect();
    }

    catalog
        .iter()
        .filter(|template| matches_selection(template, selection))
        .collect()
}

fn matches_selection(template: &TemplateRecord, selection: &FilterSelection) -> bool {
    let channel_match = match selection.channel() {
        None => true,
        Some(channel) => template
            .channels()
            .is_none_or(|channels| channels.contains(&channel)),
    };
    let industry_match = match selection.industry() {
        None => true,
        Some(industry) => template
            .industries()
            .is_none_or(|industries| industries.contains(&industry)),
    };
    let role_match = match selection.role() {
        None => true,
        Some(role) => template.role() == Some(role),
    };
    channel_match && industry_match && role_match
}

#[cfg(test)]
mod tests {
    use super::*;
    use template_gallery_types::{
        ProductIndustry, SurveyChannel, SurveyPreset, TemplateRole,
    };

    fn nps() -> TemplateRecord {
        TemplateRecord::new("NPS", SurveyPreset::empty()).with_channels([SurveyChannel::Link])
    }

    fn csat() -> TemplateRecord {
        TemplateRecord::new("CSAT", SurveyPreset::empty()).with_channels([SurveyChannel::App])
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![nps(), csat()])
    }

    fn names<'a>(templates: &'a [&'a TemplateRecord]) -> Vec<&'a str> {
        templates.iter().map(|t| t.name()).collect()
    }

    #[test]
    fn no_constraints_returns_full_catalog_in_order() {
        let catalog = catalog();
        let matched = matching_templates(&catalog, &FilterSelection::none(), None);
        assert_eq!(names(&matched), ["NPS", "CSAT"]);
    }

    #[test]
    fn channel_constraint_selects_by_membership() {
        let catalog = catalog();
        let selection = FilterSelection::none().with_channel(SurveyChannel::App);
        let matched = matching_templates(&catalog, &selection, None);
        assert_eq!(names(&matched), ["CSAT"]);
    }

    #[test]
    fn unset_channel_tags_match_any_channel_constraint() {
        let catalog = Catalog::new(vec![
            TemplateRecord::new("untagged", SurveyPreset::empty()),
            csat(),
        ]);
        let selection = FilterSelection::none().with_channel(SurveyChannel::Link);
        let matched = matching_templates(&catalog, &selection, None);
        assert_eq!(names(&matched), ["untagged"]);
    }

    #[test]
    fn empty_channel_set_matches_nothing() {
        let catalog = Catalog::new(vec![
            TemplateRecord::new("picky", SurveyPreset::empty()).with_channels([]),
        ]);
        let selection = FilterSelection::none().with_channel(SurveyChannel::Link);
        assert!(matching_templates(&catalog, &selection, None).is_empty());
    }

    #[test]
    fn unset_role_does_not_match_role_constraint() {
        let catalog = catalog();
        let selection = FilterSelection::none().with_role(TemplateRole::Sales);
        assert!(matching_templates(&catalog, &selection, None).is_empty());
    }

    #[test]
    fn all_constrained_dimensions_must_accept() {
        let record = TemplateRecord::new("combo", SurveyPreset::empty())
            .with_channels([SurveyChannel::App])
            .with_industries([ProductIndustry::Saas])
            .with_role(TemplateRole::Marketing);
        let catalog = Catalog::new(vec![record]);

        let matching = FilterSelection::none()
            .with_channel(SurveyChannel::App)
            .with_industry(ProductIndustry::Saas)
            .with_role(TemplateRole::Marketing);
        assert_eq!(matching_templates(&catalog, &matching, None).len(), 1);

        let wrong_role = FilterSelection::none()
            .with_channel(SurveyChannel::App)
            .with_role(TemplateRole::Sales);
        assert!(matching_templates(&catalog, &wrong_role, None).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_prefix() {
        let catalog = catalog();
        let matched = matching_templates(&catalog, &FilterSelection::none(), Some("np"));
        assert_eq!(names(&matched), ["NPS"]);
        let matched = matching_templates(&catalog, &FilterSelection::none(), Some("csAT"));
        assert_eq!(names(&matched), ["CSAT"]);
    }

    #[test]
    fn search_overrides_filter_selection() {
        let catalog = catalog();
        // The filter would exclude NPS, but search takes precedence.
        let selection = FilterSelection::none().with_channel(SurveyChannel::App);
        let matched = matching_templates(&catalog, &selection, Some("nps"));
        assert_eq!(names(&matched), ["NPS"]);
    }

    #[test]
    fn empty_search_falls_back_to_faceted_filtering() {
        let catalog = catalog();
        let selection = FilterSelection::none().with_channel(SurveyChannel::App);
        let matched = matching_templates(&catalog, &selection, Some(""));
        assert_eq!(names(&matched), ["CSAT"]);
    }

    #[test]
    fn malformed_entry_fails_open() {
        let catalog = catalog();
        // "app" alone would exclude NPS; the malformed entry voids filtering.
        let selection = FilterSelection::from_raw(["app", "not-a-filter"]);
        let matched = matching_templates(&catalog, &selection, None);
        assert_eq!(names(&matched), ["NPS", "CSAT"]);
    }

    #[test]
    fn output_preserves_catalog_order() {
        let catalog = Catalog::new(vec![
            TemplateRecord::new("B", SurveyPreset::empty()),
            TemplateRecord::new("A", SurveyPreset::empty()),
            TemplateRecord::new("C", SurveyPreset::empty()),
        ]);
        let matched = matching_templates(&catalog, &FilterSelection::none(), None);
        assert_eq!(names(&matched), ["B", "A", "C"]);
    }
}
