/// Error type for the survey-creation workflow.
///
/// The display string of every variant is the short, user-visible message the
/// notification sink receives; diagnostics beyond that go to the log.
#[derive(Debug, thiserror::Error)]
pub enum CreateSurveyError {
    /// The session context carries no product configuration.
    #[error("Product configuration is missing.")]
    MissingProductConfig,

    /// The session context carries no user identifier.
    #[error("User information is missing.")]
    MissingUser,

    /// The session context carries no environment identifier.
    #[error("Environment information is missing.")]
    MissingEnvironment,

    /// The remote create call itself failed (transport or unexpected error).
    #[error("Failed to create survey.")]
    RemoteRejected(#[source] anyhow::Error),

    /// The call "succeeded" but returned no usable survey identifier.
    #[error("{message}")]
    MalformedResponse {
        /// Best-available message extracted from the response.
        message: String,
    },
}

impl CreateSurveyError {
    /// Wrap a backend failure.
    pub fn remote(err: impl Into<anyhow::Error>) -> Self {
        Self::RemoteRejected(err.into())
    }

    /// Check if this is a locally detected precondition failure, which never
    /// reaches the network.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::MissingProductConfig | Self::MissingUser | Self::MissingEnvironment
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_classification() {
        assert!(CreateSurveyError::MissingUser.is_precondition());
        assert!(!CreateSurveyError::remote(anyhow::anyhow!("down")).is_precondition());
    }

    #[test]
    fn user_visible_messages() {
        assert_eq!(
            CreateSurveyError::MissingProductConfig.to_string(),
            "Product configuration is missing."
        );
        assert_eq!(
            CreateSurveyError::remote(anyhow::anyhow!("connection reset")).to_string(),
            "Failed to create survey."
        );
        let malformed = CreateSurveyError::MalformedResponse {
            message: "name: required".to_string(),
        };
        assert_eq!(malformed.to_string(), "name: required");
    }
}
