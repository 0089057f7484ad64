use reqwest::StatusCode;

use rc_api::types::ErrorResponse;

/// Errors returned by the Resource Controller SDK.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required identifier or field was missing or empty. Raised before
    /// any request is sent.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// A parameter was present but not an accepted value.
    #[error("invalid parameter {0}: {1}")]
    InvalidParameter(&'static str, String),

    /// The service answered with a documented error status.
    #[error("API error ({status}): {}", message_of(.body).unwrap_or("no message"))]
    Api {
        status: StatusCode,
        body: ErrorResponse,
    },

    /// Transport, decoding, or undocumented-status failure from the API client.
    #[error("client error: {0}")]
    Client(rc_api::Error<ErrorResponse>),

    /// HTTP client construction error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status reported by the service, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Client(err) => err.status(),
            Self::Http(err) => err.status(),
            Self::MissingParameter(_) | Self::InvalidParameter(..) | Self::Config(_) => None,
        }
    }

    /// Server-provided error message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => message_of(body),
            _ => None,
        }
    }

    /// The resource was already deleted (410).
    pub fn is_gone(&self) -> bool {
        self.status() == Some(StatusCode::GONE)
    }

    /// The service rejected the request (400), e.g. the resource still has
    /// dependents or is locked.
    pub fn is_bad_request(&self) -> bool {
        self.status() == Some(StatusCode::BAD_REQUEST)
    }

    /// Local parameter validation failed; nothing was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingParameter(_) | Self::InvalidParameter(..))
    }
}

fn message_of(body: &ErrorResponse) -> Option<&str> {
    body.message
        .as_deref()
        .or(body.description.as_deref())
        .filter(|m| !m.is_empty())
}

impl From<rc_api::Error<ErrorResponse>> for Error {
    fn from(err: rc_api::Error<ErrorResponse>) -> Self {
        match err {
            rc_api::Error::ErrorResponse(response) => {
                let status = response.status();
                Self::Api {
                    status,
                    body: response.into_inner(),
                }
            }
            other => Self::Client(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn body(message: Option<&str>, description: Option<&str>) -> ErrorResponse {
        serde_json::from_value(serde_json::json!({
            "message": message,
            "description": description,
            "error_code": "RC-TestError",
            "status_code": 400,
        }))
        .unwrap()
    }

    #[test]
    fn test_api_error_display_prefers_message() {
        let err = Error::Api {
            status: StatusCode::BAD_REQUEST,
            body: body(Some("instance is locked"), Some("ignored")),
        };
        let display = err.to_string();
        assert!(display.contains("400"));
        assert!(display.contains("instance is locked"));
        assert_eq!(err.message(), Some("instance is locked"));
    }

    #[test]
    fn test_api_error_falls_back_to_description() {
        let err = Error::Api {
            status: StatusCode::GONE,
            body: body(None, Some("already removed")),
        };
        assert_eq!(err.message(), Some("already removed"));
        assert!(err.is_gone());
        assert!(!err.is_bad_request());
    }

    #[test]
    fn test_api_error_without_message() {
        let err = Error::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: body(Some(""), None),
        };
        assert_eq!(err.message(), None);
        assert!(err.to_string().contains("no message"));
    }

    #[test]
    fn test_missing_parameter_has_no_status() {
        let err = Error::MissingParameter("id");
        assert_eq!(err.status(), None);
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "missing required parameter: id");
    }

    #[test]
    fn test_invalid_request_maps_to_client_error() {
        let err: Error =
            rc_api::Error::<ErrorResponse>::InvalidRequest("id was not initialized".into()).into();
        assert!(matches!(err, Error::Client(_)));
        assert_eq!(err.status(), None);
    }
}
