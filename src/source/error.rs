use thiserror::Error;

/// Failures reported by a [`RemoteSource`](super::RemoteSource).
///
/// The `Display` output is what the posts slice records as its error.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to reach the remote or read its response
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote answered with a non-success status
    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Source refused the call
    #[error("{0}")]
    Rejected(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_includes_code() {
        let err = SourceError::Status {
            status: 503,
            message: "unavailable".into(),
        };
        assert_eq!(err.to_string(), "Server responded with 503: unavailable");
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let err: SourceError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, SourceError::Decode(_)));
    }
}
