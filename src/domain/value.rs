use std::borrow::Cow;
use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Clone, PartialEq, Eq, Hash)]
/// MedianaSMS access key, sent as `Authorization: AccessKey <key>`.
///
/// Invariant: non-empty after trimming. `Debug` output never shows the key.
pub struct AccessKey(String);

impl AccessKey {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "access_key";

    /// Create a validated [`AccessKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender line number (`originator`), e.g. `+9810001`.
///
/// Invariant: non-empty after trimming. The line must be assigned to your account.
pub struct Originator(String);

impl Originator {
    /// JSON field name used by MedianaSMS (`originator`).
    pub const FIELD: &'static str = "originator";

    /// Create a validated [`Originator`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated line number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by MedianaSMS (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Code of a server-stored pattern (`pattern_code`), e.g. `t2cfmnyo0c`.
///
/// Invariant: non-empty after trimming.
pub struct PatternCode(String);

impl PatternCode {
    /// JSON field name used by MedianaSMS (`pattern_code`).
    pub const FIELD: &'static str = "pattern_code";

    /// Create a validated [`PatternCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated pattern code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Pattern body with `%placeholder%` markers (`pattern`).
///
/// Invariant: non-empty after trimming. The original value is preserved.
pub struct PatternText(String);

impl PatternText {
    /// JSON field name used by MedianaSMS (`pattern`).
    pub const FIELD: &'static str = "pattern";

    /// Create a validated [`PatternText`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the pattern as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifier of a submitted outbound batch (`bulk_id`).
pub struct BulkId(i64);

impl BulkId {
    /// JSON field name used by MedianaSMS (`bulk_id`).
    pub const FIELD: &'static str = "bulk_id";

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BulkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to MedianaSMS (`recipients` / `recipient`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want E.164
/// normalization, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// JSON field name used by MedianaSMS for bulk sends (`recipients`).
    pub const FIELD: &'static str = "recipients";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to MedianaSMS.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// A recipient number normalized to E.164, for callers that hold local-format numbers.
///
/// Converts into [`RawPhoneNumber`] for use in requests. Equality compares the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
}

impl PhoneNumber {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "recipient";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164 })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// MedianaSMS response code (`code` in every response envelope).
///
/// The value is an opaque tag: it is compared as a string and preserved as-is even when
/// the code is unknown to this crate.
pub struct ResponseCode(Cow<'static, str>);

impl ResponseCode {
    /// Inputs failed validation; the error body carries per-field errors.
    pub const UNPROCESSABLE_ENTITY: Self = Self::from_static("422");

    /// Construct a response code from a static string.
    pub const fn from_static(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }

    /// Construct a response code from its wire representation.
    pub fn new(code: impl Into<String>) -> Self {
        Self(Cow::Owned(code.into()))
    }

    /// Get the code as provided by MedianaSMS.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map this code to a known response code variant, if one exists.
    pub fn known(&self) -> Option<KnownResponseCode> {
        KnownResponseCode::from_code(&self.0)
    }

    /// Returns `true` for the code that carries per-field validation errors.
    pub fn is_unprocessable_entity(&self) -> bool {
        *self == Self::UNPROCESSABLE_ENTITY
    }

    /// Returns `true` if this code reports a missing, invalid, or revoked access key.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_auth_error())
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<KnownResponseCode> for ResponseCode {
    fn from(value: KnownResponseCode) -> Self {
        Self::from_static(value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known MedianaSMS response codes.
///
/// Unknown codes are preserved as [`ResponseCode`] and return `None` from
/// [`KnownResponseCode::from_code`].
pub enum KnownResponseCode {
    Credential,
    MessageBodyEmpty,
    UserLimited,
    LineNotAssigned,
    RecipientsEmpty,
    CreditNotEnough,
    LineNotProfitableForBulkSend,
    LineTemporarilyDeactivated,
    MaximumRecipientsExceeded,
    OperatorOffline,
    NoPricing,
    TicketInvalid,
    AccessDenied,
    PatternInvalid,
    PatternParametersInvalid,
    PatternInactive,
    PatternRecipientInvalid,
    PatternUnauthorizedSend,
    OutsideSendingHours,
    CreditCardNotProvided,
    DocumentsNotApproved,
    Internal,
    EntityNotFound,
    Forbidden,
    UnprocessableEntity,
    Unauthorized,
    KeyNotValid,
    KeyRevoked,
}

impl KnownResponseCode {
    /// Convert a raw MedianaSMS code into a known variant.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "10001" => Self::Credential,
            "10002" => Self::MessageBodyEmpty,
            "10003" => Self::UserLimited,
            "10004" => Self::LineNotAssigned,
            "10005" => Self::RecipientsEmpty,
            "10006" => Self::CreditNotEnough,
            "10007" => Self::LineNotProfitableForBulkSend,
            "10008" => Self::LineTemporarilyDeactivated,
            "10009" => Self::MaximumRecipientsExceeded,
            "10010" => Self::OperatorOffline,
            "10011" => Self::NoPricing,
            "10012" => Self::TicketInvalid,
            "10013" => Self::AccessDenied,
            "10014" => Self::PatternInvalid,
            "10015" => Self::PatternParametersInvalid,
            "10016" => Self::PatternInactive,
            "10017" => Self::PatternRecipientInvalid,
            "10018" => Self::PatternUnauthorizedSend,
            "10019" => Self::OutsideSendingHours,
            "10020" => Self::CreditCardNotProvided,
            "10021" => Self::DocumentsNotApproved,
            "10022" => Self::Internal,
            "10023" => Self::EntityNotFound,
            "10024" => Self::Forbidden,
            "422" => Self::UnprocessableEntity,
            "1401" => Self::Unauthorized,
            "1402" => Self::KeyNotValid,
            "1403" => Self::KeyRevoked,
            _ => return None,
        })
    }

    /// Wire representation of this code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Credential => "10001",
            Self::MessageBodyEmpty => "10002",
            Self::UserLimited => "10003",
            Self::LineNotAssigned => "10004",
            Self::RecipientsEmpty => "10005",
            Self::CreditNotEnough => "10006",
            Self::LineNotProfitableForBulkSend => "10007",
            Self::LineTemporarilyDeactivated => "10008",
            Self::MaximumRecipientsExceeded => "10009",
            Self::OperatorOffline => "10010",
            Self::NoPricing => "10011",
            Self::TicketInvalid => "10012",
            Self::AccessDenied => "10013",
            Self::PatternInvalid => "10014",
            Self::PatternParametersInvalid => "10015",
            Self::PatternInactive => "10016",
            Self::PatternRecipientInvalid => "10017",
            Self::PatternUnauthorizedSend => "10018",
            Self::OutsideSendingHours => "10019",
            Self::CreditCardNotProvided => "10020",
            Self::DocumentsNotApproved => "10021",
            Self::Internal => "10022",
            Self::EntityNotFound => "10023",
            Self::Forbidden => "10024",
            Self::UnprocessableEntity => "422",
            Self::Unauthorized => "1401",
            Self::KeyNotValid => "1402",
            Self::KeyRevoked => "1403",
        }
    }

    /// Whether this code indicates a missing, invalid, or revoked access key.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::Credential | Self::Unauthorized | Self::KeyNotValid | Self::KeyRevoked
        )
    }
}
