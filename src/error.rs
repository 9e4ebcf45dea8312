use thiserror::Error;

#[derive(Error, Debug)]
pub enum SusyError {
    #[error("Request to SuSy failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Could not fetch {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<SusyError>,
    },

    #[error("Failed to parse HTML: {0}")]
    ParsingError(String),

    #[error("Could not find required element on the page: {0}")]
    ElementNotFound(String),

    #[error("The due date was not found (saw {dates} dates and {times} times)")]
    DueDateNotFound { dates: usize, times: usize },

    #[error("Invalid due date '{value}': {source}")]
    InvalidDueDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SusyError {
    /// Wraps the error with a human readable context, keeping it as the source.
    pub fn context(self, context: impl Into<String>) -> Self {
        SusyError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping every context layer.
    pub fn root(&self) -> &SusyError {
        match self {
            SusyError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Timeouts, TLS failures, connection errors and HTTP status errors.
    pub fn is_transport(&self) -> bool {
        matches!(
            self.root(),
            SusyError::RequestError(_) | SusyError::FetchFailed { .. }
        )
    }

    pub fn is_due_date_missing(&self) -> bool {
        matches!(self.root(), SusyError::DueDateNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, SusyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_prepended_and_root_is_kept() {
        let err = SusyError::ElementNotFound("table".to_string())
            .context("error processing lab01")
            .context("could not fetch assignments");

        assert_eq!(
            err.to_string(),
            "could not fetch assignments: error processing lab01: \
             Could not find required element on the page: table"
        );
        assert!(matches!(err.root(), SusyError::ElementNotFound(_)));
        assert!(!err.is_transport());
    }

    #[test]
    fn fetch_failures_are_transport_errors() {
        let err = SusyError::FetchFailed {
            url: "https://susy.ic.unicamp.br:9999/mc999".to_string(),
            reason: "connection reset".to_string(),
        }
        .context("could not fetch assignments");

        assert!(err.is_transport());
        assert!(!err.is_due_date_missing());
    }

    #[test]
    fn due_date_absence_survives_context() {
        let err = SusyError::DueDateNotFound { dates: 1, times: 0 }.context("error processing t1");
        assert!(err.is_due_date_missing());
    }
}
