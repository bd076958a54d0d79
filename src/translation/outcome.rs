use thiserror::Error;

/// The result of one completed translation attempt.
///
/// Both variants carry text meant to be shown to the user. A message the
/// service itself reports (for example an unsupported query construct) is a
/// `Success`; only transport-level problems produce a `Failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Success { text: String },
    Failure { message: String },
}

impl TranslationOutcome {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { text: text.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Text to display for this outcome.
    pub fn text(&self) -> &str {
        match self {
            Self::Success { text } => text,
            Self::Failure { message } => message,
        }
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

impl From<TransportError> for TranslationOutcome {
    fn from(err: TransportError) -> Self {
        Self::failure(format!("Error: {err}"))
    }
}

/// Failures to obtain a usable reply from the translation service.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("failed to reach translation service at {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unreadable response from translation service (HTTP {status}): {detail}")]
    MalformedResponse { status: u16, detail: String },

    #[error("response contained neither '{expected}' nor 'error' (HTTP {status})")]
    MissingFields { expected: &'static str, status: u16 },
}
