//! Twilio REST API client for outbound SMS and phone verification.
//!
//! Covers the two Twilio surfaces this service relays to: the Messaging API
//! (send an SMS) and the Verify API (start / check an OTP verification).

pub mod client;
pub mod error;
pub mod types;

pub use client::TwilioClient;
pub use error::TwilioError;
pub use types::{MessageResource, VerificationCheckResource, VerificationResource};
