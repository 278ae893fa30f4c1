//! Transport layer: wire-format details (envelope, error bodies, endpoint payloads).

mod api_error;
mod credit;
mod envelope;
mod message;
mod pattern;

pub use api_error::{MalformedErrorEnvelope, classify_error};
pub use credit::decode_credit;
pub use envelope::Envelope;
pub use message::{
    decode_bulk_id, decode_inbox, decode_message, decode_recipients, encode_list_query,
    encode_send_message_body,
};
pub use pattern::{decode_pattern, encode_create_pattern_body, encode_send_pattern_body};
