use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::domain::{Pagination, ResponseCode};

/// The uniform wrapper returned by every MedianaSMS endpoint.
///
/// `data` is kept as the raw JSON token and decoded on demand with
/// [`Envelope::decode_data`], since its shape depends on the endpoint (and on whether
/// the call failed).
#[derive(Debug, Clone)]
pub struct Envelope {
    status: String,
    code: ResponseCode,
    data: Box<RawValue>,
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeJson {
    #[serde(default)]
    status: String,
    code: TransportCode,
    data: Box<RawValue>,
    #[serde(default)]
    meta: Option<PaginationJson>,
}

/// Response codes are documented as strings; numbers are tolerated as well.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TransportCode {
    String(String),
    Number(serde_json::Number),
}

impl TransportCode {
    fn into_response_code(self) -> ResponseCode {
        match self {
            Self::String(value) => ResponseCode::new(value),
            Self::Number(value) => ResponseCode::new(value.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PaginationJson {
    #[serde(default)]
    total: i64,
    #[serde(default)]
    limit: i64,
    #[serde(default)]
    page: i64,
    #[serde(default)]
    pages: i64,
    #[serde(default)]
    prev: Option<String>,
    #[serde(default)]
    next: Option<String>,
}

impl From<PaginationJson> for Pagination {
    fn from(value: PaginationJson) -> Self {
        Self {
            total: value.total,
            limit: value.limit,
            page: value.page,
            pages: value.pages,
            prev: value.prev,
            next: value.next,
        }
    }
}

impl Envelope {
    /// Parse a response body. Fails if `code` or `data` is missing; `status` defaults to empty.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let parsed: EnvelopeJson = serde_json::from_slice(body)?;
        Ok(Self {
            status: parsed.status,
            code: parsed.code.into_response_code(),
            data: parsed.data,
            pagination: parsed.meta.map(Pagination::from),
        })
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn code(&self) -> &ResponseCode {
        &self.code
    }

    /// Pagination details; only list endpoints send them.
    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// The undecoded `data` token.
    pub fn raw_data(&self) -> &str {
        self.data.get()
    }

    /// Decode `data` into the type expected at the call site.
    pub fn decode_data<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(self.data.get())
    }
}
