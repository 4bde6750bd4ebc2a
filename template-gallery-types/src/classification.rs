use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a wire string does not name a known classification value.
#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct ParseClassificationError {
    /// Which classification was being parsed ("channel", "industry", "role").
    pub kind: &'static str,
    /// The offending input.
    pub value: String,
}

/// The delivery medium for a survey.
///
/// Doubles as the survey *type* injected into a creation payload: a product
/// configured for a channel creates surveys of that type, defaulting to
/// [`SurveyChannel::Link`] when the product has no channel configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyChannel {
    /// Standalone survey reached via a shared link.
    Link,
    /// Survey embedded in a mobile or desktop app.
    App,
    /// Survey embedded in a website.
    Website,
}

impl SurveyChannel {
    /// The wire string for this channel.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::App => "app",
            Self::Website => "website",
        }
    }
}

impl fmt::Display for SurveyChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SurveyChannel {
    type Err = ParseClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "link" => Ok(Self::Link),
            "app" => Ok(Self::App),
            "website" => Ok(Self::Website),
            other => Err(ParseClassificationError {
                kind: "channel",
                value: other.to_string(),
            }),
        }
    }
}

/// The industry a template is tailored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductIndustry {
    #[serde(rename = "eCommerce")]
    ECommerce,
    #[serde(rename = "saas")]
    Saas,
    #[serde(rename = "other")]
    Other,
}

impl ProductIndustry {
    /// The wire string for this industry.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ECommerce => "eCommerce",
            Self::Saas => "saas",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ProductIndustry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductIndustry {
    type Err = ParseClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eCommerce" => Ok(Self::ECommerce),
            "saas" => Ok(Self::Saas),
            "other" => Ok(Self::Other),
            other => Err(ParseClassificationError {
                kind: "industry",
                value: other.to_string(),
            }),
        }
    }
}

/// The role a template is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateRole {
    ProductManager,
    CustomerSuccess,
    Marketing,
    Sales,
}

impl TemplateRole {
    /// The wire string for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProductManager => "productManager",
            Self::CustomerSuccess => "customerSuccess",
            Self::Marketing => "marketing",
            Self::Sales => "sales",
        }
    }
}

impl fmt::Display for TemplateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateRole {
    type Err = ParseClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "productManager" => Ok(Self::ProductManager),
            "customerSuccess" => Ok(Self::CustomerSuccess),
            "marketing" => Ok(Self::Marketing),
            "sales" => Ok(Self::Sales),
            other => Err(ParseClassificationError {
                kind: "role",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_round_trip() {
        for channel in [SurveyChannel::Link, SurveyChannel::App, SurveyChannel::Website] {
            assert_eq!(channel.as_str().parse::<SurveyChannel>().unwrap(), channel);
        }
    }

    #[test]
    fn industry_wire_strings() {
        assert_eq!(ProductIndustry::ECommerce.as_str(), "eCommerce");
        assert_eq!("saas".parse::<ProductIndustry>().unwrap(), ProductIndustry::Saas);
    }

    #[test]
    fn role_round_trip() {
        let role: TemplateRole = "customerSuccess".parse().unwrap();
        assert_eq!(role, TemplateRole::CustomerSuccess);
        assert_eq!(role.to_string(), "customerSuccess");
    }

    #[test]
    fn unknown_value_is_rejected() {
        let err = "telegraph".parse::<SurveyChannel>().unwrap_err();
        assert_eq!(err.kind, "channel");
        assert_eq!(err.value, "telegraph");
    }

    #[test]
    fn serde_matches_from_str() {
        let json = serde_json::to_string(&SurveyChannel::Website).unwrap();
        assert_eq!(json, "\"website\"");
        let back: SurveyChannel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SurveyChannel::Website);
    }
}
