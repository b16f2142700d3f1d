//! SMS relay service.
//!
//! Relays outbound SMS and phone-number OTP verification through Twilio and
//! keeps a local log of sent messages in a flat JSON file.

pub mod api;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::RelayError;
