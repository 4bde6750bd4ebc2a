use serde::{Deserialize, Serialize};

use crate::{ProductIndustry, SurveyChannel};

/// The product configuration part of the session context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductConfig {
    /// The channel the product ships surveys on; resolves the survey type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<SurveyChannel>,

    /// The industry the product operates in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<ProductIndustry>,
}

impl ProductConfig {
    /// Create an empty configuration (no channel, no industry).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel.
    pub fn with_channel(mut self, channel: SurveyChannel) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Set the industry.
    pub fn with_industry(mut self, industry: ProductIndustry) -> Self {
        self.industry = Some(industry);
        self
    }
}

/// The read-only context supplied by the hosting page.
///
/// All fields are optional at the type level because a host may mount the
/// gallery before its own data has loaded. The creation orchestrator
/// validates presence before building a creation request; nothing in this
/// library silently substitutes defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    environment_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    product_config: Option<ProductConfig>,
}

impl SessionContext {
    /// Create an empty context with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current user identifier.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set the current environment identifier.
    pub fn with_environment(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    /// Set the product configuration.
    pub fn with_product_config(mut self, config: ProductConfig) -> Self {
        self.product_config = Some(config);
        self
    }

    /// The user identifier, if present and non-empty.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }

    /// The environment identifier, if present and non-empty.
    pub fn environment_id(&self) -> Option<&str> {
        self.environment_id.as_deref().filter(|id| !id.is_empty())
    }

    /// The product configuration, if present.
    pub fn product_config(&self) -> Option<&ProductConfig> {
        self.product_config.as_ref()
    }

    /// A fully-populated placeholder context for demos and tests.
    ///
    /// This is a seam, not a fallback: the orchestrator validates the
    /// context it is given either way, and production hosts are expected to
    /// supply their own.
    pub fn placeholder() -> Self {
        Self::new()
            .with_user("default-user-id")
            .with_environment("default-env-id")
            .with_product_config(ProductConfig::new())
    }
}
