//! Typed Rust client for the MedianaSMS HTTP API.
//!
//! The crate has three layers: a domain layer of strong types, a transport layer for
//! the wire format (the response envelope and the two error body shapes), and a small
//! client layer that executes requests and dispatches on the HTTP status.
//!
//! ```rust,no_run
//! use medianasms::{AccessKey, MedianaSmsClient, MessageText, Originator, RawPhoneNumber, SendMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), medianasms::MedianaSmsError> {
//!     let client = MedianaSmsClient::new(AccessKey::new("...")?)?;
//!     let request = SendMessage::new(
//!         Originator::new("+9810001")?,
//!         vec![RawPhoneNumber::new("98912000000")?],
//!         MessageText::new("hello")?,
//!     )?;
//!     let _bulk_id = client.send_message(request).await?;
//!     Ok(())
//! }
//! ```
//!
//! Errors the API reports are surfaced as [`MedianaSmsError::Api`]; branch on
//! [`ApiError::code`] to tell, say, a validation failure from insufficient credit:
//!
//! ```rust,no_run
//! # async fn run(client: medianasms::MedianaSmsClient) {
//! use medianasms::{ApiError, KnownResponseCode, MedianaSmsError};
//!
//! match client.get_credit().await {
//!     Ok(credit) => println!("credit: {credit}"),
//!     Err(MedianaSmsError::Api(ApiError::FieldErrors { errors, .. })) => {
//!         for (field, failures) in errors {
//!             println!("{field}: {failures:?}");
//!         }
//!     }
//!     Err(MedianaSmsError::Api(err))
//!         if err.code().known() == Some(KnownResponseCode::CreditNotEnough) =>
//!     {
//!         println!("top up first");
//!     }
//!     Err(other) => eprintln!("request failed: {other}"),
//! }
//! # }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{DEFAULT_TIMEOUT, MedianaSmsClient, MedianaSmsClientBuilder, MedianaSmsError};
pub use domain::{
    AccessKey, ApiError, BulkId, ConfirmState, CreatePattern, FieldError, FieldErrors,
    InboxMessage, KnownResponseCode, ListParams, Message, MessageRecipient, MessageStatus,
    MessageText, MessageType, Originator, Page, Pagination, Pattern, PatternCode, PatternStatus,
    PatternText, PhoneNumber, RawPhoneNumber, ResponseCode, SendMessage, SendPattern,
    ValidationError,
};
pub use transport::{Envelope, MalformedErrorEnvelope};
