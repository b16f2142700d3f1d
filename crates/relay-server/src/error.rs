//! Error types for the relay service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Relay request errors.
///
/// Callers only ever see the generic per-route message; failure detail is
/// logged server-side at the point the error is raised.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Provider or storage failure while relaying a send.
    #[error("Failed to send message")]
    SendFailed,

    /// Provider failure while starting a verification.
    #[error("Failed to initiate verification")]
    VerificationStartFailed,

    /// Provider failure while checking a verification code.
    #[error("Failed to verify the code")]
    VerificationCheckFailed,

    /// The provider reported a verification status other than "approved".
    #[error("Invalid OTP")]
    InvalidOtp,

    /// The message log could not be read.
    #[error("Failed to load messages")]
    Storage,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            // A rejected code is a validation failure, not a server error
            RelayError::InvalidOtp => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "message": self.to_string() })),
            )
                .into_response(),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_otp_is_bad_request() {
        let response = RelayError::InvalidOtp.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_errors_are_server_errors() {
        for err in [
            RelayError::SendFailed,
            RelayError::VerificationStartFailed,
            RelayError::VerificationCheckFailed,
            RelayError::Storage,
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
