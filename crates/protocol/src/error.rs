use thiserror::Error;

/// Reasons a plot update can fail.
///
/// The UI treats every variant the same way; the distinction only shows up
/// in the console message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    #[error("HTTP {status}")]
    Http { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("render failed: {0}")]
    Render(String),
}

impl From<serde_json::Error> for PlotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl PlotError {
    /// Map a response status to an error, `None` for 2xx
    pub const fn from_status(status: u16) -> Option<Self> {
        if matches!(status, 200..=299) {
            None
        } else {
            Some(Self::Http { status })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_statuses_are_not_errors() {
        assert_eq!(PlotError::from_status(200), None);
        assert_eq!(PlotError::from_status(204), None);
    }

    #[test]
    fn test_non_ok_statuses_are_uniform() {
        assert_eq!(
            PlotError::from_status(500),
            Some(PlotError::Http { status: 500 })
        );
        assert_eq!(
            PlotError::from_status(302),
            Some(PlotError::Http { status: 302 })
        );
        assert_eq!(
            PlotError::from_status(404).unwrap().to_string(),
            "HTTP 404"
        );
    }
}
