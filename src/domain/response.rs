use chrono::{DateTime, Utc};

use crate::domain::value::{BulkId, PatternCode};

/// Pagination details attached to list responses (`meta`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub total: i64,
    pub limit: i64,
    pub page: i64,
    pub pages: i64,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageStatus {
    Active,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageType {
    Normal,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfirmState {
    Pending,
    Confirmed,
    Rejected,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternStatus {
    Active,
    Inactive,
    Pending,
    Other(String),
}

/// A submitted outbound batch as reported by `GET /messages/{bulk_id}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub bulk_id: BulkId,
    pub number: String,
    pub message: String,
    pub status: MessageStatus,
    pub message_type: MessageType,
    pub confirm_state: ConfirmState,
    pub created_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
    pub recipients_count: i64,
    pub valid_recipients_count: i64,
    pub page: i64,
    pub cost: f64,
    pub payback_cost: f64,
    pub description: String,
}

/// Delivery status for one recipient of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecipient {
    pub recipient: String,
    pub status: String,
}

/// A message received on one of the account's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxMessage {
    pub number: String,
    pub message: String,
    pub sender: String,
    pub received_at: DateTime<Utc>,
    pub message_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub code: PatternCode,
    pub status: PatternStatus,
    pub message: String,
    pub is_shared: bool,
}
