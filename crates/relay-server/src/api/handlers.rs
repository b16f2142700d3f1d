//! HTTP request handlers.

use super::types::{
    CheckVerificationRequest, CheckVerificationResponse, HealthResponse, SendMessageRequest,
    SendMessageResponse, StartVerificationRequest, StartVerificationResponse,
};
use super::AppState;
use crate::error::RelayError;
use axum::{extract::State, Json};
use message_store::MessageRecord;
use tracing::{error, info};

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let message_count = state.store.list().await.map(|r| r.len()).ok();

    Json(HealthResponse {
        status: "ok".to_string(),
        message_count,
    })
}

/// List all logged messages, newest first.
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageRecord>>, RelayError> {
    let records = state.store.list().await.map_err(|e| {
        error!(error = %e, "Failed to read message log");
        RelayError::Storage
    })?;

    Ok(Json(records))
}

/// Relay an SMS through Twilio and log it on success.
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, RelayError> {
    info!(phone = %request.phone, "Send message request received");

    if let Err(e) = state
        .twilio
        .send_message(&request.phone, &request.message)
        .await
    {
        error!(error = %e, "Provider rejected the send");
        return Err(RelayError::SendFailed);
    }

    // The SMS is already out at this point; a failed append is still
    // reported as an overall failure, with no compensating action.
    let record = MessageRecord::new(request.phone, request.name, request.message);
    if let Err(e) = state.store.append(record).await {
        error!(error = %e, "Failed to log sent message");
        return Err(RelayError::SendFailed);
    }

    Ok(Json(SendMessageResponse { success: true }))
}

/// Ask Twilio Verify to issue an OTP to a phone number.
pub async fn start_verification(
    State(state): State<AppState>,
    Json(request): Json<StartVerificationRequest>,
) -> Result<Json<StartVerificationResponse>, RelayError> {
    info!(phone = %request.phone_number, "Verification start request received");

    let verification = state
        .twilio
        .start_verification(&request.phone_number)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to start verification");
            RelayError::VerificationStartFailed
        })?;

    Ok(Json(StartVerificationResponse {
        success: true,
        verification,
    }))
}

/// Check a submitted OTP against Twilio Verify.
pub async fn check_verification(
    State(state): State<AppState>,
    Json(request): Json<CheckVerificationRequest>,
) -> Result<Json<CheckVerificationResponse>, RelayError> {
    info!(phone = %request.phone_number, "Verification check request received");

    let check = state
        .twilio
        .check_verification(&request.phone_number, &request.code)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to check verification");
            RelayError::VerificationCheckFailed
        })?;

    if !check.is_approved() {
        info!(status = %check.status, "Verification code rejected");
        return Err(RelayError::InvalidOtp);
    }

    Ok(Json(CheckVerificationResponse {
        success: true,
        message: "Phone number verified successfully!".to_string(),
    }))
}
