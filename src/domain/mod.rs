//! Domain layer: strong types with validation and invariants (no I/O).

mod api_error;
mod request;
mod response;
mod validation;
mod value;

pub use api_error::{ApiError, FieldError, FieldErrors};
pub use request::{CreatePattern, ListParams, SendMessage, SendPattern};
pub use response::{
    ConfirmState, InboxMessage, Message, MessageRecipient, MessageStatus, MessageType, Page,
    Pagination, Pattern, PatternStatus,
};
pub use validation::ValidationError;
pub use value::{
    AccessKey, BulkId, KnownResponseCode, MessageText, Originator, PatternCode, PatternText,
    PhoneNumber, RawPhoneNumber, ResponseCode,
};
