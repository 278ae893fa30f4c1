//! Client layer: executes requests, dispatches on HTTP status and maps transport ↔ domain.

mod error;
mod http;

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

pub use error::MedianaSmsError;
use self::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

use crate::domain::{
    AccessKey, BulkId, CreatePattern, InboxMessage, ListParams, Message, MessageRecipient, Page,
    Pattern, SendMessage, SendPattern,
};
use crate::transport::{self, Envelope, classify_error};

const DEFAULT_BASE_URL: &str = "https://rest.medianasms.com/v1";

/// Timeout applied to the whole request when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

fn default_user_agent() -> String {
    format!(
        "MedianaSMS/ApiClient/{} Rust ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

#[derive(Debug, Clone)]
/// Builder for [`MedianaSmsClient`].
///
/// Use this when you need to customize the base URL or the timeout.
pub struct MedianaSmsClientBuilder {
    access_key: AccessKey,
    base_url: String,
    timeout: Duration,
}

impl MedianaSmsClientBuilder {
    /// Create a builder with the default base URL and a 30 second timeout.
    pub fn new(access_key: AccessKey) -> Self {
        Self {
            access_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the API base URL. Endpoint paths are appended to its path.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the timeout applied to the entire request (connect, send and receive).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a [`MedianaSmsClient`].
    pub fn build(self) -> Result<MedianaSmsClient, MedianaSmsError> {
        let base_url = parse_base_url(&self.base_url)?;
        let http = ReqwestTransport::new(self.timeout)
            .map_err(|err| MedianaSmsError::Transport(Box::new(err)))?;

        Ok(MedianaSmsClient {
            access_key: self.access_key,
            base_url,
            user_agent: default_user_agent(),
            http: Arc::new(http),
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, MedianaSmsError> {
    let url = Url::parse(raw).map_err(|err| MedianaSmsError::InvalidBaseUrl {
        url: raw.to_owned(),
        source: Some(err),
    })?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(MedianaSmsError::InvalidBaseUrl {
            url: raw.to_owned(),
            source: None,
        });
    }
    Ok(url)
}

#[derive(Clone)]
/// High-level MedianaSMS client.
///
/// Every call is one HTTP round trip that returns the response envelope; the endpoint
/// methods then decode the envelope's `data` into typed results. Configuration is fixed
/// at construction, so a client can be cloned and shared between tasks freely.
pub struct MedianaSmsClient {
    access_key: AccessKey,
    base_url: Url,
    user_agent: String,
    http: Arc<dyn HttpTransport>,
}

impl MedianaSmsClient {
    /// Create a client using the default base URL and timeout.
    ///
    /// For more customization, use [`MedianaSmsClient::builder`].
    pub fn new(access_key: AccessKey) -> Result<Self, MedianaSmsError> {
        MedianaSmsClientBuilder::new(access_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(access_key: AccessKey) -> MedianaSmsClientBuilder {
        MedianaSmsClientBuilder::new(access_key)
    }

    /// Issue a `GET` request against `path` (relative to the base URL).
    ///
    /// Returns `Ok(None)` when the server answers `204 No Content`.
    pub async fn get(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<Option<Envelope>, MedianaSmsError> {
        self.execute::<()>(HttpMethod::Get, path, params, None).await
    }

    /// Issue a `POST` request against `path` with `body` serialized as JSON.
    ///
    /// Returns `Ok(None)` when the server answers `204 No Content`.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Option<Envelope>, MedianaSmsError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(HttpMethod::Post, path, &[], Some(body)).await
    }

    /// Send one message text to one or more recipients.
    ///
    /// Errors:
    /// - [`MedianaSmsError::Api`] when MedianaSMS rejects the request (e.g. code `10006`
    ///   for insufficient credit, or `422` with per-field errors),
    /// - [`MedianaSmsError::ServiceUnavailable`] on HTTP 500.
    pub async fn send_message(&self, request: SendMessage) -> Result<BulkId, MedianaSmsError> {
        let body = transport::encode_send_message_body(&request);
        let envelope = require_envelope(self.post("/messages", &body).await?)?;
        transport::decode_bulk_id(&envelope).map_err(decode_error)
    }

    /// Fetch a submitted batch by its bulk id.
    pub async fn get_message(&self, bulk_id: BulkId) -> Result<Message, MedianaSmsError> {
        let path = format!("/messages/{bulk_id}");
        let envelope = require_envelope(self.get(&path, &[]).await?)?;
        transport::decode_message(&envelope).map_err(decode_error)
    }

    /// Fetch per-recipient delivery statuses of a batch, one page at a time.
    pub async fn fetch_statuses(
        &self,
        bulk_id: BulkId,
        params: ListParams,
    ) -> Result<Page<MessageRecipient>, MedianaSmsError> {
        let path = format!("/messages/{bulk_id}/recipients");
        let query = transport::encode_list_query(params);
        let envelope = require_envelope(self.get(&path, &query).await?)?;
        transport::decode_recipients(&envelope).map_err(decode_error)
    }

    /// Fetch messages received on the account's lines, one page at a time.
    pub async fn fetch_inbox(
        &self,
        params: ListParams,
    ) -> Result<Page<InboxMessage>, MedianaSmsError> {
        let query = transport::encode_list_query(params);
        let envelope = require_envelope(self.get("/messages/inbox", &query).await?)?;
        transport::decode_inbox(&envelope).map_err(decode_error)
    }

    /// Register a new pattern. It stays [`PatternStatus::Pending`](crate::PatternStatus)
    /// until approved.
    pub async fn create_pattern(&self, request: CreatePattern) -> Result<Pattern, MedianaSmsError> {
        let body = transport::encode_create_pattern_body(&request);
        let envelope = require_envelope(self.post("/messages/patterns", &body).await?)?;
        transport::decode_pattern(&envelope).map_err(decode_error)
    }

    /// Send an approved pattern to a single recipient.
    pub async fn send_pattern(&self, request: SendPattern) -> Result<BulkId, MedianaSmsError> {
        let body = transport::encode_send_pattern_body(&request);
        let envelope = require_envelope(self.post("/messages/patterns/send", &body).await?)?;
        transport::decode_bulk_id(&envelope).map_err(decode_error)
    }

    /// Remaining account credit.
    pub async fn get_credit(&self) -> Result<f64, MedianaSmsError> {
        let envelope = require_envelope(self.get("/credit", &[]).await?)?;
        transport::decode_credit(&envelope).map_err(decode_error)
    }

    async fn execute<B>(
        &self,
        method: HttpMethod,
        path: &str,
        params: &[(String, String)],
        body: Option<&B>,
    ) -> Result<Option<Envelope>, MedianaSmsError>
    where
        B: Serialize + ?Sized,
    {
        let body = body
            .map(|value| serde_json::to_vec(value))
            .transpose()
            .map_err(MedianaSmsError::Encode)?;

        let request = HttpRequest {
            method,
            url: self.endpoint_url(path, params),
            headers: self.headers(),
            body,
        };
        debug!(method = method.as_str(), url = %request.url, "sending MedianaSMS request");

        let response = self
            .http
            .send(request)
            .await
            .map_err(MedianaSmsError::Transport)?;
        debug!(
            status = response.status,
            bytes = response.body.len(),
            "received MedianaSMS response"
        );

        interpret_response(response)
    }

    fn endpoint_url(&self, path: &str, params: &[(String, String)]) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            self.base_url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url.set_query(None);
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        url
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", "application/json".to_owned()),
            (
                "Authorization",
                format!("AccessKey {}", self.access_key.as_str()),
            ),
            ("User-Agent", self.user_agent.clone()),
        ]
    }
}

fn interpret_response(response: HttpResponse) -> Result<Option<Envelope>, MedianaSmsError> {
    match response.status {
        200 | 201 => parse_envelope(&response).map(Some),
        // Nothing to parse: the body of a 204 is empty by definition.
        204 => Ok(None),
        // The body of a 500 is not trustworthy.
        500 => {
            warn!("MedianaSMS answered with HTTP 500");
            Err(MedianaSmsError::ServiceUnavailable)
        }
        status => {
            let envelope = parse_envelope(&response)?;
            let api_error = classify_error(&envelope)?;
            debug!(status, code = %api_error.code(), "MedianaSMS reported an error");
            Err(MedianaSmsError::Api(api_error))
        }
    }
}

fn parse_envelope(response: &HttpResponse) -> Result<Envelope, MedianaSmsError> {
    Envelope::from_slice(&response.body).map_err(|source| MedianaSmsError::InvalidEnvelope {
        status: response.status,
        body: String::from_utf8_lossy(&response.body).into_owned(),
        source,
    })
}

fn require_envelope(envelope: Option<Envelope>) -> Result<Envelope, MedianaSmsError> {
    envelope.ok_or(MedianaSmsError::MissingEnvelope)
}

fn decode_error<E>(err: E) -> MedianaSmsError
where
    E: std::error::Error + Send + Sync + 'static,
{
    MedianaSmsError::Decode(Box::new(err))
}
