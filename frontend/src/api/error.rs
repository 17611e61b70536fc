use thiserror::Error;

/// Fallback shown when the API rejects an upload with an empty body.
pub const UPLOAD_REJECTED_MESSAGE: &str = "Failed to upload source";

/// Fallback shown when an upload fails without any message at all.
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed";

/// Failure of a single request to the Studium API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The API answered with a non-2xx status. `body` is the raw response
    /// text, empty when it could not be read.
    #[error("request failed with status {status}: {body}")]
    RequestFailure { status: u16, body: String },

    /// The request never produced a response (network error, CORS, aborted).
    #[error("{0}")]
    Network(String),

    /// The response was successful but its body was not the expected JSON.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            // Only the JS error's own message, e.g. "Failed to fetch".
            gloo_net::Error::JsError(js) => ApiError::Network(js.message),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl ApiError {
    /// Message displayed inline by the upload form.
    ///
    /// A rejected upload shows the API's response text as-is, or
    /// [`UPLOAD_REJECTED_MESSAGE`] when that text is empty. Any other failure
    /// shows its own message, or [`UPLOAD_FAILED_MESSAGE`] when it has none.
    pub fn upload_message(&self) -> String {
        match self {
            ApiError::RequestFailure { body, .. } if body.is_empty() => {
                UPLOAD_REJECTED_MESSAGE.to_string()
            }
            ApiError::RequestFailure { body, .. } => body.clone(),
            ApiError::Network(message) | ApiError::Decode(message) if message.is_empty() => {
                UPLOAD_FAILED_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_upload_shows_body_text() {
        let err = ApiError::RequestFailure {
            status: 422,
            body: "title too long".to_string(),
        };
        assert_eq!(err.upload_message(), "title too long");
    }

    #[test]
    fn rejected_upload_with_empty_body_uses_fallback() {
        let err = ApiError::RequestFailure {
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.upload_message(), "Failed to upload source");
    }

    #[test]
    fn network_failure_uses_its_message() {
        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(err.upload_message(), "Failed to fetch");
        assert_eq!(
            ApiError::Network(String::new()).upload_message(),
            "Upload failed"
        );
    }

    #[test]
    fn transport_error_keeps_plain_message() {
        let err = ApiError::from(gloo_net::Error::GlooError("Failed to fetch".to_string()));
        assert_eq!(err, ApiError::Network("Failed to fetch".to_string()));
        assert_eq!(err.upload_message(), "Failed to fetch");
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::RequestFailure {
            status: 404,
            body: "{\"detail\":\"Source not found\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "request failed with status 404: {\"detail\":\"Source not found\"}"
        );
    }
}
