//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    ApiErrorKind, Balance, ErrorCategory, Password, RawPhoneNumber, SendReceipt, SendSms,
    SenderId, Username, ValidationError,
};
use crate::transport::{self, SendSmsReply};

const DEFAULT_SEND_ENDPOINT: &str = "https://api.easysendsms.app/bulksms";
const DEFAULT_BALANCE_ENDPOINT: &str = "https://api.easysendsms.app/balance";

/// Per-request timeout for `bulksms` submissions.
const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(30);
/// Per-request timeout for `balance` lookups.
const DEFAULT_BALANCE_TIMEOUT: Duration = Duration::from_secs(10);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
        timeout: Duration,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
        timeout: Duration,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .get(url)
                .query(&query)
                .timeout(timeout)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Authentication credentials for EasySendSMS API calls.
///
/// Both endpoints authenticate with the same `username`/`password` pair.
pub struct Auth {
    username: Username,
    password: Password,
}

impl Auth {
    /// Create validated credentials.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    fn push_query_params(&self, params: &mut Vec<(String, String)>) {
        params.push((Username::FIELD.to_owned(), self.username.as_str().to_owned()));
        params.push((Password::FIELD.to_owned(), self.password.as_str().to_owned()));
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`EasySendSmsClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (a reply body that is not an accepted submission),
/// - validation failures from the domain constructors.
pub enum EasySendSmsError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// EasySendSMS rejected the request with an error reply.
    #[error("API error: {text}")]
    Api {
        kind: Option<ApiErrorKind>,
        text: String,
    },

    /// A configured base URL could not be parsed.
    #[error("invalid base url: {url}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl EasySendSmsError {
    /// The categorical classification for this failure.
    ///
    /// Every failure collapses onto one [`ErrorCategory`]; this is what the
    /// CLI prints next to the raw error text.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Transport(_) => ErrorCategory::NetworkError,
            Self::HttpStatus { .. } | Self::BaseUrl { .. } => ErrorCategory::UnknownError,
            Self::Api { kind, .. } => kind
                .map(ApiErrorKind::category)
                .unwrap_or(ErrorCategory::UnknownError),
            Self::Validation(err) => match err {
                ValidationError::SenderIdTooLong { .. }
                | ValidationError::SenderIdNotAlphanumeric { .. } => {
                    ErrorCategory::InvalidSenderId
                }
                ValidationError::InvalidPhoneNumber { .. } => ErrorCategory::InvalidDestination,
                ValidationError::Empty { field } => match *field {
                    SenderId::FIELD => ErrorCategory::InvalidSenderId,
                    RawPhoneNumber::FIELD => ErrorCategory::InvalidDestination,
                    Username::FIELD | Password::FIELD => ErrorCategory::InvalidCredentials,
                    _ => ErrorCategory::UnknownError,
                },
            },
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`EasySendSmsClient`].
///
/// Use this when you need to customize the endpoints, timeouts, or user-agent.
pub struct EasySendSmsClientBuilder {
    auth: Auth,
    base_url: Option<String>,
    send_endpoint: Option<String>,
    balance_endpoint: Option<String>,
    send_timeout: Duration,
    balance_timeout: Duration,
    user_agent: Option<String>,
}

impl EasySendSmsClientBuilder {
    /// Create a builder with the default endpoints and timeouts.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: None,
            send_endpoint: None,
            balance_endpoint: None,
            send_timeout: DEFAULT_SEND_TIMEOUT,
            balance_timeout: DEFAULT_BALANCE_TIMEOUT,
            user_agent: None,
        }
    }

    /// Derive both endpoint URLs from a base URL (`<base>/bulksms`,
    /// `<base>/balance`).
    ///
    /// Explicit [`Self::send_endpoint`]/[`Self::balance_endpoint`] overrides
    /// take precedence over the derived values.
    pub fn base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = Some(base.into());
        self
    }

    /// Override the endpoint URL for `bulksms`.
    pub fn send_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.send_endpoint = Some(endpoint.into());
        self
    }

    /// Override the endpoint URL for `balance`.
    pub fn balance_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.balance_endpoint = Some(endpoint.into());
        self
    }

    /// Set the per-request timeout for `bulksms` submissions.
    pub fn send_timeout(mut self, timeout: Duration) -> Self {
        self.send_timeout = timeout;
        self
    }

    /// Set the per-request timeout for `balance` lookups.
    pub fn balance_timeout(mut self, timeout: Duration) -> Self {
        self.balance_timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`EasySendSmsClient`].
    pub fn build(self) -> Result<EasySendSmsClient, EasySendSmsError> {
        let (derived_send, derived_balance) = match self.base_url {
            Some(base) => {
                let parsed = Url::parse(&base).map_err(|source| EasySendSmsError::BaseUrl {
                    url: base.clone(),
                    source,
                })?;
                let join = |segment: &str| {
                    parsed
                        .join(segment)
                        .map(String::from)
                        .map_err(|source| EasySendSmsError::BaseUrl {
                            url: base.clone(),
                            source,
                        })
                };
                (Some(join("bulksms")?), Some(join("balance")?))
            }
            None => (None, None),
        };

        let send_endpoint = self
            .send_endpoint
            .or(derived_send)
            .unwrap_or_else(|| DEFAULT_SEND_ENDPOINT.to_owned());
        let balance_endpoint = self
            .balance_endpoint
            .or(derived_balance)
            .unwrap_or_else(|| DEFAULT_BALANCE_ENDPOINT.to_owned());

        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| EasySendSmsError::Transport(Box::new(err)))?;

        Ok(EasySendSmsClient {
            auth: self.auth,
            send_endpoint,
            balance_endpoint,
            send_timeout: self.send_timeout,
            balance_timeout: self.balance_timeout,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level EasySendSMS client.
///
/// This type orchestrates request validation, query encoding, and reply
/// classification. By default it uses:
/// - `https://api.easysendsms.app/bulksms` for sending messages
/// - `https://api.easysendsms.app/balance` for checking the account balance
///
/// Both endpoints reply with plain text, not JSON. Each call is stateless and
/// performs exactly one HTTP GET; failures are terminal (no retries).
pub struct EasySendSmsClient {
    auth: Auth,
    send_endpoint: String,
    balance_endpoint: String,
    send_timeout: Duration,
    balance_timeout: Duration,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for EasySendSmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EasySendSmsClient")
            .field("auth", &self.auth)
            .field("send_endpoint", &self.send_endpoint)
            .field("balance_endpoint", &self.balance_endpoint)
            .field("send_timeout", &self.send_timeout)
            .field("balance_timeout", &self.balance_timeout)
            .field("http", &"<dyn HttpTransport>")
            .finish()
    }
}

impl EasySendSmsClient {
    /// Create a client using the default endpoints and timeouts.
    ///
    /// For more customization, use [`EasySendSmsClient::builder`].
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            balance_endpoint: DEFAULT_BALANCE_ENDPOINT.to_owned(),
            send_timeout: DEFAULT_SEND_TIMEOUT,
            balance_timeout: DEFAULT_BALANCE_TIMEOUT,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> EasySendSmsClientBuilder {
        EasySendSmsClientBuilder::new(auth)
    }

    /// Submit an SMS batch through EasySendSMS.
    ///
    /// The whole batch goes out as a single `bulksms` GET request.
    ///
    /// Errors:
    /// - [`EasySendSmsError::Transport`] for network failures (no retry),
    /// - [`EasySendSmsError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`EasySendSmsError::Api`] when EasySendSMS rejects the submission.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendReceipt, EasySendSmsError> {
        let mut params = Vec::<(String, String)>::new();
        self.auth.push_query_params(&mut params);
        params.extend(transport::encode_send_sms_query(&request));

        let response = self
            .http
            .get(&self.send_endpoint, params, self.send_timeout)
            .await
            .map_err(EasySendSmsError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(EasySendSmsError::HttpStatus {
                status: response.status,
                body,
            });
        }

        match transport::decode_send_sms_reply(&response.body) {
            SendSmsReply::Accepted { message_id } => Ok(SendReceipt {
                message_id,
                recipients: request.recipients().len(),
                sender: request.sender().clone(),
            }),
            SendSmsReply::Rejected { kind, text } => Err(EasySendSmsError::Api { kind, text }),
        }
    }

    /// Look up the account balance through EasySendSMS.
    ///
    /// The reply body is taken verbatim (trimmed); only transport failures
    /// and non-2xx HTTP statuses fail this call.
    pub async fn check_balance(&self) -> Result<Balance, EasySendSmsError> {
        let mut params = Vec::<(String, String)>::new();
        self.auth.push_query_params(&mut params);

        let response = self
            .http
            .get(&self.balance_endpoint, params, self.balance_timeout)
            .await
            .map_err(EasySendSmsError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(EasySendSmsError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(transport::decode_balance_reply(&response.body))
    }
}
