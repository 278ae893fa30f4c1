use std::collections::BTreeMap;
use std::fmt;

use crate::domain::value::ResponseCode;

/// One validation failure reported for an input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Machine-readable reason, e.g. `required`.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

/// Field name to the ordered list of failures reported for it.
pub type FieldErrors = BTreeMap<String, Vec<FieldError>>;

/// An error reported by the MedianaSMS API in a well-formed error envelope.
///
/// Both variants keep the originating [`ResponseCode`], so callers can branch on
/// [`ApiError::code`] regardless of the message shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Inputs were rejected (`code` is [`ResponseCode::UNPROCESSABLE_ENTITY`]).
    FieldErrors {
        code: ResponseCode,
        errors: FieldErrors,
    },
    /// Any other failure, described by a single message.
    Simple { code: ResponseCode, message: String },
}

impl ApiError {
    pub fn code(&self) -> &ResponseCode {
        match self {
            Self::FieldErrors { code, .. } | Self::Simple { code, .. } => code,
        }
    }

    /// Per-field failures, if this is a validation error.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::FieldErrors { errors, .. } => Some(errors),
            Self::Simple { .. } => None,
        }
    }

    /// The single message, if this is not a validation error.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::FieldErrors { .. } => None,
            Self::Simple { message, .. } => Some(message),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple { code, message } => write!(f, "{message} (code {code})"),
            Self::FieldErrors { code, errors } => {
                write!(f, "invalid input (code {code})")?;
                let mut sep = ": ";
                for (field, failures) in errors {
                    for failure in failures {
                        write!(f, "{sep}{field}: {} [{}]", failure.message, failure.code)?;
                        sep = "; ";
                    }
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ApiError {}
