use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::envelope::Envelope;
use crate::domain::{
    BulkId, ConfirmState, InboxMessage, ListParams, Message, MessageRecipient, MessageStatus,
    MessageType, Page, RawPhoneNumber, SendMessage,
};

#[derive(Debug, Serialize)]
pub struct SendMessageJsonRequest<'a> {
    originator: &'a str,
    recipients: Vec<&'a str>,
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct BulkIdJsonResponse {
    bulk_id: i64,
}

#[derive(Debug, Deserialize)]
struct GetMessageJsonResponse {
    message: MessageJson,
}

#[derive(Debug, Deserialize)]
struct MessageJson {
    bulk_id: i64,
    #[serde(default)]
    number: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
    #[serde(default, rename = "type")]
    message_type: String,
    #[serde(default)]
    confirm_state: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    sent_at: Option<DateTime<Utc>>,
    #[serde(default)]
    recipients_count: i64,
    #[serde(default)]
    valid_recipients_count: i64,
    #[serde(default)]
    page: i64,
    #[serde(default)]
    cost: f64,
    #[serde(default)]
    payback_cost: f64,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RecipientsJsonResponse {
    #[serde(default)]
    recipients: Vec<MessageRecipientJson>,
}

#[derive(Debug, Deserialize)]
struct MessageRecipientJson {
    recipient: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct InboxJsonResponse {
    #[serde(default)]
    messages: Vec<InboxMessageJson>,
}

#[derive(Debug, Deserialize)]
struct InboxMessageJson {
    number: String,
    message: String,
    #[serde(default)]
    sender: String,
    time: DateTime<Utc>,
    #[serde(default, rename = "type")]
    message_type: String,
}

pub fn encode_send_message_body(request: &SendMessage) -> SendMessageJsonRequest<'_> {
    SendMessageJsonRequest {
        originator: request.originator().as_str(),
        recipients: request
            .recipients()
            .iter()
            .map(RawPhoneNumber::raw)
            .collect(),
        message: request.message().as_str(),
    }
}

pub fn encode_list_query(params: ListParams) -> Vec<(String, String)> {
    vec![
        ("page".to_owned(), params.page.to_string()),
        ("limit".to_owned(), params.limit.to_string()),
    ]
}

/// Decode `{"bulk_id": ..}`, returned by both plain and pattern sends.
pub fn decode_bulk_id(envelope: &Envelope) -> Result<BulkId, serde_json::Error> {
    let parsed: BulkIdJsonResponse = envelope.decode_data()?;
    Ok(BulkId::new(parsed.bulk_id))
}

pub fn decode_message(envelope: &Envelope) -> Result<Message, serde_json::Error> {
    let parsed: GetMessageJsonResponse = envelope.decode_data()?;
    let message = parsed.message;
    Ok(Message {
        bulk_id: BulkId::new(message.bulk_id),
        number: message.number,
        message: message.message,
        status: message_status(message.status),
        message_type: message_type(message.message_type),
        confirm_state: confirm_state(message.confirm_state),
        created_at: message.created_at,
        sent_at: message.sent_at,
        recipients_count: message.recipients_count,
        valid_recipients_count: message.valid_recipients_count,
        page: message.page,
        cost: message.cost,
        payback_cost: message.payback_cost,
        description: message.description.unwrap_or_default(),
    })
}

pub fn decode_recipients(
    envelope: &Envelope,
) -> Result<Page<MessageRecipient>, serde_json::Error> {
    let parsed: RecipientsJsonResponse = envelope.decode_data()?;
    Ok(Page {
        items: parsed
            .recipients
            .into_iter()
            .map(|it| MessageRecipient {
                recipient: it.recipient,
                status: it.status,
            })
            .collect(),
        pagination: envelope.pagination().cloned(),
    })
}

pub fn decode_inbox(envelope: &Envelope) -> Result<Page<InboxMessage>, serde_json::Error> {
    let parsed: InboxJsonResponse = envelope.decode_data()?;
    Ok(Page {
        items: parsed
            .messages
            .into_iter()
            .map(|it| InboxMessage {
                number: it.number,
                message: it.message,
                sender: it.sender,
                received_at: it.time,
                message_type: it.message_type,
            })
            .collect(),
        pagination: envelope.pagination().cloned(),
    })
}

fn message_status(value: String) -> MessageStatus {
    match value.as_str() {
        "active" => MessageStatus::Active,
        _ => MessageStatus::Other(value),
    }
}

fn message_type(value: String) -> MessageType {
    match value.as_str() {
        "normal" => MessageType::Normal,
        _ => MessageType::Other(value),
    }
}

fn confirm_state(value: String) -> ConfirmState {
    match value.as_str() {
        "pending" => ConfirmState::Pending,
        "confirmed" => ConfirmState::Confirmed,
        "rejected" => ConfirmState::Rejected,
        _ => ConfirmState::Other(value),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::domain::{MessageText, Originator, PhoneNumber};

    use super::*;

    fn envelope(json: &str) -> Envelope {
        Envelope::from_slice(json.as_bytes()).unwrap()
    }

    #[test]
    fn encode_send_message_uses_wire_field_names() {
        let request = SendMessage::new(
            Originator::new("+9810001").unwrap(),
            vec![
                RawPhoneNumber::new("98912000000").unwrap(),
                RawPhoneNumber::new("98912000001").unwrap(),
            ],
            MessageText::new("hello").unwrap(),
        )
        .unwrap();

        let body = serde_json::to_value(encode_send_message_body(&request)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "originator": "+9810001",
                "recipients": ["98912000000", "98912000001"],
                "message": "hello"
            })
        );
    }

    #[test]
    fn local_numbers_are_sent_in_e164() {
        let local = PhoneNumber::parse(Some(phonenumber::country::Id::IR), "0912 123 4567").unwrap();
        let request = SendMessage::new(
            Originator::new("+9810001").unwrap(),
            vec![local.into()],
            MessageText::new("hello").unwrap(),
        )
        .unwrap();

        let body = serde_json::to_value(encode_send_message_body(&request)).unwrap();
        assert_eq!(body["recipients"], serde_json::json!(["+989121234567"]));
    }

    #[test]
    fn encode_list_query_sets_page_and_limit() {
        assert_eq!(
            encode_list_query(ListParams::new(2, 25)),
            vec![
                ("page".to_owned(), "2".to_owned()),
                ("limit".to_owned(), "25".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_bulk_id_reads_data() {
        let env = envelope(r#"{"status": "ok", "code": "0", "data": {"bulk_id": 73301196}}"#);
        assert_eq!(decode_bulk_id(&env).unwrap(), BulkId::new(73301196));
    }

    #[test]
    fn decode_message_maps_payload() {
        let env = envelope(
            r#"
            {
              "status": "ok",
              "code": "0",
              "data": {
                "message": {
                  "bulk_id": 73301196,
                  "number": "+9810001",
                  "message": "mediana is awesome",
                  "status": "active",
                  "type": "normal",
                  "confirm_state": "confirmed",
                  "created_at": "2020-03-01T10:15:00Z",
                  "sent_at": "2020-03-01T10:16:30+03:30",
                  "recipients_count": 2,
                  "valid_recipients_count": 1,
                  "page": 1,
                  "cost": 240.5,
                  "payback_cost": 0,
                  "description": null
                }
              }
            }
            "#,
        );

        let message = decode_message(&env).unwrap();
        assert_eq!(message.bulk_id, BulkId::new(73301196));
        assert_eq!(message.status, MessageStatus::Active);
        assert_eq!(message.message_type, MessageType::Normal);
        assert_eq!(message.confirm_state, ConfirmState::Confirmed);
        assert_eq!(
            message.created_at,
            Utc.with_ymd_and_hms(2020, 3, 1, 10, 15, 0).unwrap()
        );
        assert_eq!(
            message.sent_at,
            Some(Utc.with_ymd_and_hms(2020, 3, 1, 6, 46, 30).unwrap())
        );
        assert_eq!(message.recipients_count, 2);
        assert_eq!(message.cost, 240.5);
        assert_eq!(message.payback_cost, 0.0);
        assert_eq!(message.description, "");
    }

    #[test]
    fn decode_message_keeps_unknown_states() {
        let env = envelope(
            r#"
            {
              "status": "ok",
              "code": "0",
              "data": {
                "message": {
                  "bulk_id": 1,
                  "status": "archived",
                  "type": "flash",
                  "confirm_state": "on-hold",
                  "created_at": "2020-03-01T10:15:00Z"
                }
              }
            }
            "#,
        );

        let message = decode_message(&env).unwrap();
        assert_eq!(message.status, MessageStatus::Other("archived".to_owned()));
        assert_eq!(message.message_type, MessageType::Other("flash".to_owned()));
        assert_eq!(
            message.confirm_state,
            ConfirmState::Other("on-hold".to_owned())
        );
        assert_eq!(message.sent_at, None);
    }

    #[test]
    fn decode_recipients_attaches_pagination() {
        let env = envelope(
            r#"
            {
              "status": "ok",
              "code": "0",
              "data": {
                "recipients": [
                  {"recipient": "98912000000", "status": "delivered"},
                  {"recipient": "98912000001", "status": "failed"}
                ]
              },
              "meta": {"total": 2, "limit": 10, "page": 0, "pages": 1, "prev": null, "next": null}
            }
            "#,
        );

        let page = decode_recipients(&env).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].recipient, "98912000001");
        assert_eq!(page.items[1].status, "failed");
        let pagination = page.pagination.unwrap();
        assert_eq!(pagination.total, 2);
        assert_eq!(pagination.next, None);
    }

    #[test]
    fn decode_inbox_maps_time_and_type() {
        let env = envelope(
            r#"
            {
              "status": "ok",
              "code": "0",
              "data": {
                "messages": [
                  {
                    "number": "+9810001",
                    "message": "hi there",
                    "sender": "98912000000",
                    "time": "2020-03-02T08:00:00Z",
                    "type": "normal"
                  }
                ]
              }
            }
            "#,
        );

        let page = decode_inbox(&env).unwrap();
        assert_eq!(page.pagination, None);
        assert_eq!(page.items.len(), 1);
        let item = &page.items[0];
        assert_eq!(item.sender, "98912000000");
        assert_eq!(
            item.received_at,
            Utc.with_ymd_and_hms(2020, 3, 2, 8, 0, 0).unwrap()
        );
        assert_eq!(item.message_type, "normal");
    }

    fn two_recipient_request() -> SendMessage {
        SendMessage::new(
            Originator::new("+9810001").unwrap(),
            vec![
                RawPhoneNumber::new("98912000000").unwrap(),
                RawPhoneNumber::new("98912000001").unwrap(),
            ],
            MessageText::new("mediana is awesome").unwrap(),
        )
        .unwrap()
    }

    fn envelope_with(data: serde_json::Value, meta: Option<serde_json::Value>) -> Envelope {
        let mut json = serde_json::json!({"status": "ok", "code": "0", "data": data});
        if let Some(meta) = meta {
            json["meta"] = meta;
        }
        Envelope::from_slice(json.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn sent_message_mirrors_into_bulk_id_and_message() {
        let request = two_recipient_request();
        let body = serde_json::to_value(encode_send_message_body(&request)).unwrap();

        let sent = envelope_with(serde_json::json!({"bulk_id": 73301196}), None);
        let bulk_id = decode_bulk_id(&sent).unwrap();

        let fetched = envelope_with(
            serde_json::json!({
                "message": {
                    "bulk_id": bulk_id.value(),
                    "number": body["originator"],
                    "message": body["message"],
                    "status": "active",
                    "type": "normal",
                    "confirm_state": "pending",
                    "created_at": "2020-03-01T10:15:00Z",
                    "recipients_count": body["recipients"].as_array().unwrap().len(),
                    "valid_recipients_count": body["recipients"].as_array().unwrap().len(),
                    "page": 1,
                    "cost": 2.0,
                    "payback_cost": 0.0,
                    "description": ""
                }
            }),
            None,
        );

        let message = decode_message(&fetched).unwrap();
        assert_eq!(message.bulk_id, bulk_id);
        assert_eq!(message.number, request.originator().as_str());
        assert_eq!(message.message, request.message().as_str());
        assert_eq!(message.recipients_count, request.recipients().len() as i64);
        assert_eq!(message.confirm_state, ConfirmState::Pending);
    }

    #[test]
    fn sent_recipients_mirror_into_statuses_page() {
        let request = two_recipient_request();
        let body = serde_json::to_value(encode_send_message_body(&request)).unwrap();
        let params = ListParams::new(0, 10);
        let query = encode_list_query(params);

        let recipients: Vec<serde_json::Value> = body["recipients"]
            .as_array()
            .unwrap()
            .iter()
            .map(|it| serde_json::json!({"recipient": it, "status": "delivered"}))
            .collect();
        let total = recipients.len();
        let env = envelope_with(
            serde_json::json!({"recipients": recipients}),
            Some(serde_json::json!({
                "total": total,
                "page": query[0].1.parse::<i64>().unwrap(),
                "limit": query[1].1.parse::<i64>().unwrap(),
                "pages": 1
            })),
        );

        let page = decode_recipients(&env).unwrap();
        let sent: Vec<&str> = request.recipients().iter().map(RawPhoneNumber::raw).collect();
        let got: Vec<&str> = page.items.iter().map(|it| it.recipient.as_str()).collect();
        assert_eq!(got, sent);

        let pagination = page.pagination.unwrap();
        assert_eq!(pagination.page, i64::from(params.page));
        assert_eq!(pagination.limit, i64::from(params.limit));
        assert_eq!(pagination.total, 2);
        assert_eq!(pagination.prev, None);
    }

    #[test]
    fn replies_to_a_sent_message_mirror_into_inbox_page() {
        let request = two_recipient_request();
        let body = serde_json::to_value(encode_send_message_body(&request)).unwrap();
        let params = ListParams::new(2, 5);

        let env = envelope_with(
            serde_json::json!({
                "messages": [{
                    "number": body["originator"],
                    "message": body["message"],
                    "sender": body["recipients"][1],
                    "time": "2020-03-02T08:00:00Z",
                    "type": "normal"
                }]
            }),
            Some(serde_json::json!({
                "total": 6,
                "page": params.page,
                "limit": params.limit,
                "pages": 2,
                "prev": "1"
            })),
        );

        let page = decode_inbox(&env).unwrap();
        assert_eq!(page.items.len(), 1);
        let item = &page.items[0];
        assert_eq!(item.number, request.originator().as_str());
        assert_eq!(item.message, request.message().as_str());
        assert_eq!(item.sender, request.recipients()[1].raw());
        assert_eq!(item.message_type, "normal");

        let pagination = page.pagination.unwrap();
        assert_eq!(pagination.page, 2);
        assert_eq!(pagination.limit, 5);
        assert_eq!(pagination.prev.as_deref(), Some("1"));
        assert_eq!(pagination.next, None);
    }

    #[test]
    fn decode_errors_surface_for_wrong_shape() {
        let env = envelope(r#"{"status": "ok", "code": "0", "data": {"bulk": "x"}}"#);
        assert!(decode_bulk_id(&env).is_err());
        assert!(decode_message(&env).is_err());
    }
}
