//! Twilio API resource types.
//!
//! Subsets of the Messaging and Verify API responses; fields this service
//! never reads are left out and unknown fields are ignored on deserialize.

use serde::{Deserialize, Serialize};

/// A created message resource from the Messaging API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResource {
    /// Message SID (e.g. "SM...")
    pub sid: String,

    /// Delivery status at creation time (usually "queued")
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub to: Option<String>,

    #[serde(default)]
    pub from: Option<String>,
}

/// An in-progress verification resource from the Verify API.
///
/// Returned verbatim to callers of start-verification as the opaque
/// verification handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResource {
    /// Verification SID (e.g. "VE...")
    pub sid: String,

    #[serde(default)]
    pub service_sid: Option<String>,

    /// Phone number the code was issued to
    pub to: String,

    /// Delivery channel ("sms")
    pub channel: String,

    /// Verification status ("pending" until checked)
    pub status: String,

    #[serde(default)]
    pub valid: Option<bool>,

    #[serde(default)]
    pub date_created: Option<String>,

    #[serde(default)]
    pub date_updated: Option<String>,
}

/// Result of submitting a code to the Verify API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationCheckResource {
    #[serde(default)]
    pub sid: Option<String>,

    #[serde(default)]
    pub to: Option<String>,

    /// "approved" when the code matched; anything else otherwise
    pub status: String,

    #[serde(default)]
    pub valid: Option<bool>,
}

impl VerificationCheckResource {
    /// Whether the submitted code matched.
    pub fn is_approved(&self) -> bool {
        self.status == "approved"
    }
}
