//! Error types for the Mana Pool client

use thiserror::Error;

/// Unified error type for manapool operations
#[derive(Debug, Error)]
pub enum ManapoolError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON (response body or input file)
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// API answered with a non-success status; body is kept verbatim
    #[error("HTTP Error {code}: {body}", code = .status.as_u16())]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Reading an input file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Token or email not configured
    #[error("Both MANAPOOL_API_TOKEN and MANAPOOL_API_EMAIL environment variables must be set.")]
    MissingCredentials,
    /// Invalid combination of command line arguments
    #[error("{0}")]
    Usage(String),
}

impl ManapoolError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ManapoolError::MissingCredentials | ManapoolError::Usage(_) => 2,
            _ => 1,
        }
    }
}

/// Result alias for manapool operations
pub type Result<T> = std::result::Result<T, ManapoolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_display_includes_code_and_body() {
        let err = ManapoolError::HttpStatus {
            status: reqwest::StatusCode::NOT_FOUND,
            body: r#"{"detail":"not found"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"HTTP Error 404: {"detail":"not found"}"#);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn usage_errors_exit_with_two() {
        assert_eq!(ManapoolError::Usage("bad".into()).exit_code(), 2);
        assert_eq!(ManapoolError::MissingCredentials.exit_code(), 2);
    }
}
