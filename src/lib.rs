//! Typed Rust client for the EasySendSMS HTTP API.
//!
//! EasySendSMS exposes a query-string API with plain-text replies: one GET
//! per operation, `bulksms` for sending and `balance` for the account
//! balance. The crate mirrors that shape: a domain layer of strong types, a
//! transport layer for the wire-format quirks, and a small client layer
//! orchestrating requests. The `easysendsms` binary wraps the client in a
//! command-line tool for bulk sends with alphanumeric sender ids.
//!
//! ```rust,no_run
//! use easysendsms::{
//!     Auth, EasySendSmsClient, MessageText, RawPhoneNumber, SendOptions, SendSms, SenderId,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), easysendsms::EasySendSmsError> {
//!     let client = EasySendSmsClient::new(Auth::new("username", "password")?);
//!     let sender = SenderId::new("YourBrand")?;
//!     let phone = RawPhoneNumber::new("+447123456789")?;
//!     let text = MessageText::new("Hello!")?;
//!     let request = SendSms::new(sender, vec![phone], text, SendOptions::default())?;
//!     let receipt = client.send_sms(request).await?;
//!     println!("accepted as {}", receipt.message_id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Auth, EasySendSmsClient, EasySendSmsClientBuilder, EasySendSmsError};
pub use domain::{
    ApiErrorKind, Balance, ErrorCategory, MessageId, MessageText, Password, PhoneNumber,
    RawPhoneNumber, SendOptions, SendReceipt, SendSms, SenderId, Username, ValidationError,
};
