//! Twilio HTTP client.

use crate::error::TwilioError;
use crate::types::{MessageResource, VerificationCheckResource, VerificationResource};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Default Messaging API host.
pub const DEFAULT_API_BASE_URL: &str = "https://api.twilio.com";

/// Default Verify API host.
pub const DEFAULT_VERIFY_BASE_URL: &str = "https://verify.twilio.com";

/// Long-lived Twilio API client.
///
/// Constructed once from configuration and shared across requests; holds a
/// single connection pool with a fixed request timeout.
#[derive(Clone)]
pub struct TwilioClient {
    client: Client,
    api_base_url: String,
    verify_base_url: String,
    account_sid: String,
    auth_token: SecretString,
    from_number: String,
    verify_service_sid: String,
}

impl TwilioClient {
    /// Create a new Twilio client against the public API hosts.
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: SecretString,
        from_number: impl Into<String>,
        verify_service_sid: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TwilioError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_base_url: DEFAULT_API_BASE_URL.into(),
            verify_base_url: DEFAULT_VERIFY_BASE_URL.into(),
            account_sid: account_sid.into(),
            auth_token,
            from_number: from_number.into(),
            verify_service_sid: verify_service_sid.into(),
        })
    }

    /// Override the Messaging API host (tests point this at a mock server).
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Override the Verify API host (tests point this at a mock server).
    pub fn with_verify_base_url(mut self, url: impl Into<String>) -> Self {
        self.verify_base_url = url.into();
        self
    }

    /// The configured sender phone number.
    pub fn from_number(&self) -> &str {
        &self.from_number
    }

    /// Send an SMS to `to` from the configured sender number.
    #[instrument(skip(self, body))]
    pub async fn send_message(
        &self,
        to: &str,
        body: &str,
    ) -> Result<MessageResource, TwilioError> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base_url,
            encode(&self.account_sid)
        );

        debug!(to = %to, "Sending SMS");

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(&[("To", to), ("From", self.from_number.as_str()), ("Body", body)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Message send failed");
            return Err(TwilioError::Api { status, body });
        }

        let message: MessageResource = response.json().await?;
        debug!(sid = %message.sid, "SMS accepted by Twilio");
        Ok(message)
    }

    /// Ask Verify to issue a one-time code to `to` over SMS.
    #[instrument(skip(self))]
    pub async fn start_verification(
        &self,
        to: &str,
    ) -> Result<VerificationResource, TwilioError> {
        let url = format!(
            "{}/v2/Services/{}/Verifications",
            self.verify_base_url,
            encode(&self.verify_service_sid)
        );

        debug!(to = %to, "Starting verification");

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(&[("To", to), ("Channel", "sms")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Verification start failed");
            return Err(TwilioError::Api { status, body });
        }

        let verification: VerificationResource = response.json().await?;
        debug!(sid = %verification.sid, "Verification started");
        Ok(verification)
    }

    /// Submit a code for `to` to Verify.
    ///
    /// A well-formed non-matching code is not an error here; the returned
    /// resource carries a status other than "approved".
    #[instrument(skip(self, code))]
    pub async fn check_verification(
        &self,
        to: &str,
        code: &str,
    ) -> Result<VerificationCheckResource, TwilioError> {
        let url = format!(
            "{}/v2/Services/{}/VerificationCheck",
            self.verify_base_url,
            encode(&self.verify_service_sid)
        );

        debug!(to = %to, "Checking verification code");

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(&[("To", to), ("Code", code)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Verification check failed");
            return Err(TwilioError::Api { status, body });
        }

        let check: VerificationCheckResource = response.json().await?;
        debug!(status = %check.status, "Verification check completed");
        Ok(check)
    }
}
