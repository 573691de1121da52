use roman_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unsupported httpMethod")]
    MethodNotAllowed,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("input out of range: {0}")]
    OutOfRange(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Body sent to the client. Details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::MethodNotAllowed => "unsupported httpMethod",
            ApiError::InvalidInput(_) => "invalid input",
            ApiError::OutOfRange(_) => "input out of range",
            ApiError::Internal(_) => "internal error",
        }
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidInput(raw) => ApiError::InvalidInput(raw),
            e @ ModelError::OutOfRange { .. } => ApiError::OutOfRange(e.to_string()),
        }
    }
}

#[cfg(feature = "http")]
impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::{StatusCode, header};

        let status = match &self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidInput(_) | ApiError::OutOfRange(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = self.public_message();
        match self {
            ApiError::MethodNotAllowed => {
                (status, [(header::ALLOW, "GET, HEAD")], body).into_response()
            }
            _ => (status, body).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_map_to_client_errors() {
        let err = ApiError::from(ModelError::InvalidInput("asd".into()));
        assert!(matches!(err, ApiError::InvalidInput(ref raw) if raw == "asd"));
        assert_eq!(err.public_message(), "invalid input");

        let err = ApiError::from(ModelError::OutOfRange { value: 9, max: 5 });
        assert!(matches!(err, ApiError::OutOfRange(_)));
        assert_eq!(err.public_message(), "input out of range");
    }
}
