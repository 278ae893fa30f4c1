use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::envelope::Envelope;
use crate::domain::{
    CreatePattern, Pattern, PatternCode, PatternStatus, SendPattern, ValidationError,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid pattern in response: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Serialize)]
pub struct CreatePatternJsonRequest<'a> {
    pattern: &'a str,
    is_shared: bool,
}

#[derive(Debug, Serialize)]
pub struct SendPatternJsonRequest<'a> {
    pattern_code: &'a str,
    originator: &'a str,
    recipient: &'a str,
    values: &'a BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct PatternJson {
    code: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    is_shared: bool,
}

pub fn encode_create_pattern_body(request: &CreatePattern) -> CreatePatternJsonRequest<'_> {
    CreatePatternJsonRequest {
        pattern: request.pattern.as_str(),
        is_shared: request.is_shared,
    }
}

pub fn encode_send_pattern_body(request: &SendPattern) -> SendPatternJsonRequest<'_> {
    SendPatternJsonRequest {
        pattern_code: request.pattern_code().as_str(),
        originator: request.originator().as_str(),
        recipient: request.recipient().raw(),
        values: request.values(),
    }
}

pub fn decode_pattern(envelope: &Envelope) -> Result<Pattern, TransportError> {
    let parsed: PatternJson = envelope.decode_data()?;
    Ok(Pattern {
        code: PatternCode::new(parsed.code)?,
        status: pattern_status(parsed.status),
        message: parsed.message,
        is_shared: parsed.is_shared,
    })
}

fn pattern_status(value: String) -> PatternStatus {
    match value.as_str() {
        "active" => PatternStatus::Active,
        "inactive" => PatternStatus::Inactive,
        "pending" => PatternStatus::Pending,
        _ => PatternStatus::Other(value),
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{BulkId, Originator, PatternText, RawPhoneNumber};
    use crate::transport::decode_bulk_id;

    use super::*;

    #[test]
    fn create_pattern_body_mirrors_into_decoded_pattern() {
        let request = CreatePattern::new(PatternText::new("%name% is awesome").unwrap(), true);
        let body = serde_json::to_value(encode_create_pattern_body(&request)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"pattern": "%name% is awesome", "is_shared": true})
        );

        let json = serde_json::json!({
            "status": "ok",
            "code": "0",
            "data": {
                "code": "t2cfmnyo0c",
                "status": "pending",
                "message": body["pattern"],
                "is_shared": body["is_shared"]
            }
        });
        let env = Envelope::from_slice(json.to_string().as_bytes()).unwrap();

        let pattern = decode_pattern(&env).unwrap();
        assert_eq!(pattern.code.as_str(), "t2cfmnyo0c");
        assert_eq!(pattern.status, PatternStatus::Pending);
        assert_eq!(pattern.message, request.pattern.as_str());
        assert_eq!(pattern.is_shared, request.is_shared);
    }

    #[test]
    fn send_pattern_body_carries_values() {
        let request = SendPattern::new(
            PatternCode::new("t2cfmnyo0c").unwrap(),
            Originator::new("+9810001").unwrap(),
            RawPhoneNumber::new("98912000000").unwrap(),
        )
        .value("name", "Mediana");

        let body = serde_json::to_value(encode_send_pattern_body(&request)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "pattern_code": "t2cfmnyo0c",
                "originator": "+9810001",
                "recipient": "98912000000",
                "values": {"name": "Mediana"}
            })
        );
    }

    #[test]
    fn created_pattern_code_mirrors_into_send_and_bulk_id() {
        let created = Envelope::from_slice(
            br#"{"status": "ok", "code": "0", "data": {"code": "t2cfmnyo0c", "status": "active", "message": "%name% is awesome", "is_shared": false}}"#,
        )
        .unwrap();
        let pattern = decode_pattern(&created).unwrap();

        let request = SendPattern::new(
            pattern.code.clone(),
            Originator::new("+9810001").unwrap(),
            RawPhoneNumber::new("98912000000").unwrap(),
        )
        .value("name", "Mediana");
        let body = serde_json::to_value(encode_send_pattern_body(&request)).unwrap();
        assert_eq!(body["pattern_code"], pattern.code.as_str());
        assert_eq!(body["values"]["name"], "Mediana");

        let sent = Envelope::from_slice(
            br#"{"status": "ok", "code": "0", "data": {"bulk_id": 5}}"#,
        )
        .unwrap();
        assert_eq!(decode_bulk_id(&sent).unwrap(), BulkId::new(5));
    }

    #[test]
    fn decode_pattern_rejects_empty_code() {
        let env = Envelope::from_slice(
            br#"{"status": "ok", "code": "0", "data": {"code": " ", "status": "active"}}"#,
        )
        .unwrap();
        assert!(matches!(
            decode_pattern(&env),
            Err(TransportError::Validation(_))
        ));
    }

    #[test]
    fn decode_pattern_keeps_unknown_status() {
        let env = Envelope::from_slice(
            br#"{"status": "ok", "code": "0", "data": {"code": "abc", "status": "blocked"}}"#,
        )
        .unwrap();
        let pattern = decode_pattern(&env).unwrap();
        assert_eq!(pattern.status, PatternStatus::Other("blocked".to_owned()));
        assert!(!pattern.is_shared);
    }
}
