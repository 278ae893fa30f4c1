use std::collections::BTreeMap;

use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, Originator, PatternCode, PatternText, RawPhoneNumber};

/// Paging parameters for list endpoints (`page`, `limit` query parameters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub limit: u32,
}

impl ListParams {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

/// Send one message text from a line to one or more recipients.
#[derive(Debug, Clone)]
pub struct SendMessage {
    originator: Originator,
    recipients: Vec<RawPhoneNumber>,
    message: MessageText,
}

impl SendMessage {
    pub fn new(
        originator: Originator,
        recipients: Vec<RawPhoneNumber>,
        message: MessageText,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }
        Ok(Self {
            originator,
            recipients,
            message,
        })
    }

    pub fn originator(&self) -> &Originator {
        &self.originator
    }

    pub fn recipients(&self) -> &[RawPhoneNumber] {
        &self.recipients
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }
}

/// Register a new pattern. Shared patterns are visible to other accounts.
#[derive(Debug, Clone)]
pub struct CreatePattern {
    pub pattern: PatternText,
    pub is_shared: bool,
}

impl CreatePattern {
    pub fn new(pattern: PatternText, is_shared: bool) -> Self {
        Self { pattern, is_shared }
    }
}

/// Send a pattern to a single recipient, filling `%name%` placeholders from `values`.
#[derive(Debug, Clone)]
pub struct SendPattern {
    pattern_code: PatternCode,
    originator: Originator,
    recipient: RawPhoneNumber,
    values: BTreeMap<String, String>,
}

impl SendPattern {
    pub fn new(
        pattern_code: PatternCode,
        originator: Originator,
        recipient: RawPhoneNumber,
    ) -> Self {
        Self {
            pattern_code,
            originator,
            recipient,
            values: BTreeMap::new(),
        }
    }

    /// Set a placeholder value. Keys are given without the surrounding `%`.
    pub fn value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn with_values(mut self, values: BTreeMap<String, String>) -> Self {
        self.values = values;
        self
    }

    pub fn pattern_code(&self) -> &PatternCode {
        &self.pattern_code
    }

    pub fn originator(&self) -> &Originator {
        &self.originator
    }

    pub fn recipient(&self) -> &RawPhoneNumber {
        &self.recipient
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}
