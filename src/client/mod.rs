//! Client layer: validates messages, posts them and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{GATEWAY_PARAM, Message, Response, ValidationError, validate_params};

const DEFAULT_ENDPOINT: &str = "https://secure.mollie.nl/xml/sms";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    reason: String,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body)
                .send()
                .await?;
            let status = response.status();
            // hyper only keeps non-canonical reason phrases as an extension.
            let reason = response
                .extensions()
                .get::<hyper::ext::ReasonPhrase>()
                .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
                .or_else(|| status.canonical_reason().map(str::to_owned))
                .unwrap_or_default();
            let body = response.text().await?;
            Ok(HttpResponse {
                status: status.as_u16(),
                reason,
                body,
            })
        })
    }
}

#[derive(Debug, Clone)]
/// The gateway answered, but did not accept the message.
///
/// Renders as `(<gateway message>) <message>`.
pub struct DeliveryFailure {
    pub message: Message,
    pub response: Response,
}

impl fmt::Display for DeliveryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.response.message(), self.message)
    }
}

impl StdError for DeliveryFailure {}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`GatewayClient`].
///
/// A gateway-level rejection is only an error through
/// [`GatewayClient::deliver_or_fail`]; [`GatewayClient::deliver`] reports it as
/// a non-success [`Response`].
pub enum SmsError {
    /// The message was rejected before anything was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured endpoint is not a usable URL.
    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// A 2xx response body was not the expected XML document.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The gateway answered but did not accept the message (only from `deliver_or_fail`).
    #[error("{0}")]
    Delivery(Box<DeliveryFailure>),
}

#[derive(Debug, Clone)]
/// Builder for [`GatewayClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct GatewayClientBuilder {
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    https_only: bool,
}

impl Default for GatewayClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GatewayClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            https_only: true,
        }
    }

    /// Override the gateway endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Allow plain `http://` endpoints. Only meant for local test servers.
    pub fn allow_insecure_http(mut self) -> Self {
        self.https_only = false;
        self
    }

    /// Build a [`GatewayClient`].
    pub fn build(self) -> Result<GatewayClient, SmsError> {
        let url = url::Url::parse(&self.endpoint).map_err(|err| SmsError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: err.to_string(),
        })?;
        if self.https_only && url.scheme() != "https" {
            return Err(SmsError::InvalidEndpoint {
                endpoint: self.endpoint,
                reason: "scheme must be https".to_owned(),
            });
        }

        let mut builder = reqwest::Client::builder().https_only(self.https_only);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsError::Transport(Box::new(err)))?;

        Ok(GatewayClient {
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Mollie SMS client.
///
/// Each delivery validates the message, posts its parameters once to
/// `https://secure.mollie.nl/xml/sms` (or the configured endpoint) and wraps
/// the reply in a [`Response`]. Nothing is retried.
pub struct GatewayClient {
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl Default for GatewayClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GatewayClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`GatewayClient::builder`].
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder() -> GatewayClientBuilder {
        GatewayClientBuilder::new()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Validate `message` and post it to the gateway.
    ///
    /// Gateway-level rejections and non-2xx statuses come back as a
    /// [`Response`] whose [`Response::is_success`] is `false`.
    ///
    /// Errors:
    /// - [`SmsError::Validation`] when a required parameter is missing or the
    ///   originator is too long (no request is made),
    /// - [`SmsError::Transport`] when the request itself fails,
    /// - [`SmsError::Parse`] when a 2xx body is not the gateway's XML.
    pub async fn deliver(&self, message: &Message) -> Result<Response, SmsError> {
        validate_params(message.params())?;

        debug!(
            endpoint = %self.endpoint,
            recipient = message.recipient().unwrap_or_default(),
            gateway = message.param(GATEWAY_PARAM).unwrap_or_default(),
            "submitting SMS"
        );

        let body = crate::transport::encode_form(message.params());
        let raw = self
            .http
            .post_form(&self.endpoint, body)
            .await
            .map_err(SmsError::Transport)?;

        let response = crate::transport::decode_response(raw.status, &raw.reason, raw.body)
            .map_err(|err| SmsError::Parse(Box::new(err)))?;

        if response.is_http_failure() {
            warn!(status = raw.status, reason = %raw.reason, "gateway returned HTTP failure");
        } else if !response.is_success() {
            warn!(
                result_code = response.result_code().as_i32(),
                result_message = %response.message(),
                "gateway rejected SMS"
            );
        } else {
            debug!(result_code = response.result_code().as_i32(), "SMS accepted");
        }

        Ok(response)
    }

    /// Like [`GatewayClient::deliver`], but a non-success response becomes
    /// [`SmsError::Delivery`] carrying the message and the response.
    pub async fn deliver_or_fail(&self, message: &Message) -> Result<Response, SmsError> {
        let response = self.deliver(message).await?;
        if !response.is_success() {
            return Err(SmsError::Delivery(Box::new(DeliveryFailure {
                message: message.clone(),
                response,
            })));
        }
        Ok(response)
    }
}
