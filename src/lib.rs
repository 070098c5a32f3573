//! Typed Rust client for the Mollie XML SMS gateway.
//!
//! The crate is split into a domain layer (account defaults, messages,
//! validation and responses), a transport layer for wire-format quirks, and a
//! small client layer that posts one message per call.
//!
//! ```rust,no_run
//! use mollie_sms::{GatewayClient, Message, MessageConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mollie_sms::SmsError> {
//!     let config = MessageConfig::new("username", "password", "Astro INC");
//!     let client = GatewayClient::new();
//!     let message = Message::new(&config)
//!         .to("+31612345678")
//!         .with_body("hello");
//!     let response = client.deliver_or_fail(&message).await?;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{DeliveryFailure, GatewayClient, GatewayClientBuilder, SmsError};
pub use domain::{
    Gateway, KnownResultCode, Message, MessageConfig, OriginatorKind, PasswordHash,
    REQUIRED_PARAMS, Response, ResultCode, UnknownGateway, ValidationError, validate_params,
};
