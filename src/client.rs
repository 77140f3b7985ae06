use std::fmt;
use std::time::Duration;

use http::{Method, StatusCode};
use log::{debug, warn};
use once_cell::sync::Lazy;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, RETRY_AFTER};
use reqwest::Client as ReqwestClient;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::{MerakiError, MerakiResult};

/// Production endpoint of the Meraki Dashboard API.
pub const DEFAULT_BASE_URL: &str = "https://api.meraki.com/api/v1/";

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "X-Cisco-Meraki-API-Key";

static DEFAULT_BASE: Lazy<Url> = Lazy::new(|| {
    Url::parse(DEFAULT_BASE_URL).expect("Failed to parse default base URL")
});

#[cfg(feature = "default-client")]
static MERAKI_CLIENT: Lazy<arc_swap::ArcSwap<MerakiClient>> = Lazy::new(|| {
    // Create a default client using the builder's default values.
    arc_swap::ArcSwap::new(std::sync::Arc::new(MerakiClient::default()))
});

/// Initializes the static MerakiClient instance. This should be called once
/// at the beginning of your application.
#[cfg(feature = "default-client")]
pub fn initialize(client: MerakiClient) {
    MERAKI_CLIENT.store(std::sync::Arc::new(client));
}

/// Returns a reference to the static MerakiClient instance.
///
/// This function provides a thread-safe way to access the Meraki client
/// instance. It returns a reference to the current client, which can be used
/// to make API requests. If it hasn't been previously initialized it returns
/// a default instance with no API key set.
#[cfg(feature = "default-client")]
pub fn instance() -> std::sync::Arc<MerakiClient> {
    MERAKI_CLIENT.load_full()
}

/// Builder for the Meraki client.
///
/// This builder provides a fluent API for creating Meraki clients
/// with validation at build time.
#[derive(Default)]
pub struct MerakiClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    accept_invalid_certs: bool,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<ReqwestClient>,
}

impl MerakiClientBuilder {
    /// Sets the dashboard API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the API key from an environment variable.
    pub fn api_key_from_env(mut self, var_name: &str) -> Self {
        let api_key = std::env::var(var_name)
            .map_err(|e| format!("Failed to read environment variable '{}': {}", var_name, e))
            .expect("Failed to set API key from environment");
        self.api_key = Some(api_key);
        self
    }

    /// Sets the base URL of the dashboard API.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`]. Mainly useful for pointing the
    /// client at a mock server in tests.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets whether to accept invalid TLS certificates.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Sets the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a custom reqwest client (e.g., for testing or custom middleware).
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> MerakiResult<MerakiClient> {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(30));

        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| MerakiError::ConfigurationError("API key is required".into()))?;

        let base_url = match self.base_url {
            Some(url_str) => {
                // A trailing slash keeps Url::join from eating the last
                // path segment of the base.
                let url_str = if url_str.ends_with('/') { url_str } else { format!("{url_str}/") };
                Url::parse(&url_str).map_err(|e| {
                    MerakiError::ConfigurationError(format!("Invalid base URL: {e}"))
                })?
            }
            None => DEFAULT_BASE.clone(),
        };

        let user_agent = self
            .user_agent
            .as_deref()
            .unwrap_or(concat!("meraki-client/", env!("CARGO_PKG_VERSION")));

        let http_client = if let Some(custom_client) = self.http_client {
            custom_client
        } else {
            ReqwestClient::builder()
                .timeout(timeout)
                .danger_accept_invalid_certs(self.accept_invalid_certs)
                .user_agent(user_agent)
                .build()
                .map_err(|e| {
                    MerakiError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?
        };

        Ok(MerakiClient {
            base_url,
            api_key: SecretString::from(api_key),
            timeout,
            user_agent: self.user_agent,
            http_client,
        })
    }
}

/// The main client for interacting with the Meraki Dashboard API.
///
/// The client holds the API key and base URL and performs the HTTP calls on
/// behalf of the resource objects ([`Organization`](crate::Organization),
/// [`Network`](crate::Network), [`Device`](crate::Device), ...). Cloning is
/// cheap; clones share the underlying connection pool.
pub struct MerakiClient {
    base_url: Url,
    api_key: SecretString,
    timeout: Duration,
    user_agent: Option<String>,
    http_client: ReqwestClient,
}

impl Default for MerakiClient {
    fn default() -> Self {
        MerakiClient {
            base_url: DEFAULT_BASE.clone(),
            api_key: SecretString::from(String::new()),
            timeout: Duration::from_secs(30),
            user_agent: Some(concat!("meraki-client/", env!("CARGO_PKG_VERSION")).to_string()),
            http_client: ReqwestClient::new(),
        }
    }
}

impl fmt::Debug for MerakiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerakiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Error body the dashboard returns on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    errors: Vec<String>,
}

impl MerakiClient {
    pub fn builder() -> MerakiClientBuilder {
        MerakiClientBuilder::default()
    }

    /// Gets the base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> MerakiResult<Url> {
        // Endpoints are relative to the versioned base; tolerate a
        // leading slash from callers.
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    fn headers(&self) -> MerakiResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(self.api_key.expose_secret())
                .map_err(|e| MerakiError::ConfigurationError(format!("Invalid API key: {e}")))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn send<T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<T>,
    ) -> MerakiResult<reqwest::Response>
    where
        T: Serialize,
    {
        let url = self.endpoint_url(endpoint)?;

        debug!("{} {}", method, url.path());

        let mut request = self.http_client.request(method, url).headers(self.headers()?);

        if let Some(data) = body {
            request = request.json(&data);
        }

        Ok(request.send().await?)
    }

    async fn error_from_response(response: reqwest::Response) -> MerakiError {
        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) if !body.errors.is_empty() => body.errors.join("; "),
            _ => status.canonical_reason().unwrap_or("unknown error").to_string(),
        };

        warn!("API request failed with status {status}: {message}");

        match status {
            StatusCode::BAD_REQUEST => MerakiError::BadRequest(message),
            StatusCode::UNAUTHORIZED => MerakiError::AuthenticationError(message),
            StatusCode::FORBIDDEN => MerakiError::Forbidden(message),
            StatusCode::NOT_FOUND => MerakiError::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => MerakiError::RateLimited { retry_after },
            s if s.is_server_error() => MerakiError::ServerError {
                status: s.as_u16(),
                message,
            },
            s => MerakiError::ApiError(format!("API request failed with status code: {s}")),
        }
    }

    /// Makes a raw request to the Meraki Dashboard API.
    ///
    /// # Warning
    ///
    /// This is an advanced API that bypasses the type-safe wrappers. Use the
    /// resource objects (like [`Organization`](crate::Organization) or
    /// [`Network`](crate::Network)) when possible.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method to use (e.g., "GET", "PUT").
    /// * `endpoint` - The API endpoint path relative to the versioned base
    ///   (e.g., "organizations/123/networks").
    /// * `body` - Optional request body (must implement `Serialize`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails due to network issues, if the
    /// dashboard returns a non-2xx status, or if the response body cannot be
    /// decoded.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use meraki_client::{MerakiClient, MerakiError};
    /// # use serde_json::Value;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), MerakiError> {
    /// let client = MerakiClient::builder()
    ///     .api_key("your-api-key")
    ///     .build()?;
    ///
    /// let orgs: Value = client.raw_request("GET", "organizations", None::<()>).await?;
    /// println!("Organizations: {:?}", orgs);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn raw_request<T>(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<T>,
    ) -> MerakiResult<Value>
    where
        T: Serialize,
    {
        let method = Method::from_bytes(method.as_bytes()).unwrap_or(Method::GET);
        let response = self.send(method, endpoint, body).await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let text = response.text().await?;
        if text.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Make a request to the Meraki Dashboard API and decode the response.
    pub(crate) async fn request<T, R>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<T>,
    ) -> MerakiResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let response = self.send(method, endpoint, body).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::error_from_response(response).await);
        }

        debug!("response status {status}");
        Ok(response.json().await?)
    }

    /// Make a request where only the status code carries the outcome.
    ///
    /// Used for claim/remove/delete style endpoints that answer 200/201/204
    /// without a useful body.
    pub(crate) async fn request_status<T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<T>,
    ) -> MerakiResult<StatusCode>
    where
        T: Serialize,
    {
        let response = self.send(method, endpoint, body).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::error_from_response(response).await);
        }

        debug!("response status {status}");
        Ok(status)
    }
}

// Implement Clone for MerakiClient
impl Clone for MerakiClient {
    fn clone(&self) -> Self {
        MerakiClient {
            base_url: self.base_url.clone(),
            api_key: SecretString::from(self.api_key.expose_secret().to_owned()),
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
            http_client: self.http_client.clone(),
        }
    }
}
