use std::collections::BTreeMap;

use serde::Deserialize;

use super::envelope::Envelope;
use crate::domain::{ApiError, FieldError, ResponseCode};

/// The `data` of a failed response matched neither known error schema.
#[derive(Debug, thiserror::Error)]
#[error("error response with code {code} does not match a known error schema: {source}")]
pub struct MalformedErrorEnvelope {
    pub code: ResponseCode,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Debug, Deserialize)]
struct FieldErrorsJson {
    error: BTreeMap<String, Vec<FieldErrorJson>>,
}

#[derive(Debug, Deserialize)]
struct FieldErrorJson {
    code: String,
    err: String,
}

#[derive(Debug, Deserialize)]
struct SimpleErrorJson {
    error: String,
}

/// Interpret the `data` of a non-success envelope.
///
/// Only the `422` code carries per-field errors; every other code carries a single
/// message.
pub fn classify_error(envelope: &Envelope) -> Result<ApiError, MalformedErrorEnvelope> {
    let code = envelope.code().clone();

    if code.is_unprocessable_entity() {
        match envelope.decode_data::<FieldErrorsJson>() {
            Ok(parsed) => {
                let errors = parsed
                    .error
                    .into_iter()
                    .map(|(field, failures)| {
                        let failures = failures
                            .into_iter()
                            .map(|failure| FieldError {
                                code: failure.code,
                                message: failure.err,
                            })
                            .collect();
                        (field, failures)
                    })
                    .collect();
                Ok(ApiError::FieldErrors { code, errors })
            }
            Err(source) => Err(MalformedErrorEnvelope { code, source }),
        }
    } else {
        match envelope.decode_data::<SimpleErrorJson>() {
            Ok(parsed) => Ok(ApiError::Simple {
                code,
                message: parsed.error,
            }),
            Err(source) => Err(MalformedErrorEnvelope { code, source }),
        }
    }
}
