//! Error types for the Twilio client.

use thiserror::Error;

/// Errors from Twilio API calls.
#[derive(Debug, Error)]
pub enum TwilioError {
    /// Transport-level failure (connection, timeout, response decoding).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Twilio API error: {status} - {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}
