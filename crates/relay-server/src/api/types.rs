//! API request and response types.

use serde::{Deserialize, Serialize};
use twilio_client::VerificationResource;

/// Request to relay an SMS.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// Destination phone number
    pub phone: String,

    /// Message body
    pub message: String,

    /// Optional display name recorded alongside the message
    pub name: Option<String>,
}

/// Response after a successful relay.
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub success: bool,
}

/// Request to issue an OTP to a phone number.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartVerificationRequest {
    pub phone_number: String,
}

/// Response carrying the provider's verification handle.
#[derive(Debug, Serialize)]
pub struct StartVerificationResponse {
    pub success: bool,
    pub verification: VerificationResource,
}

/// Request to check a submitted OTP.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckVerificationRequest {
    pub phone_number: String,
    pub code: String,
}

/// Response after an approved verification check.
#[derive(Debug, Serialize)]
pub struct CheckVerificationResponse {
    pub success: bool,
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,

    /// Message log record count, when the log is readable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_count: Option<usize>,
}
