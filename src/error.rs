use thiserror::Error;
pub use url::ParseError as UrlParseError;

/// Error types for the Meraki API client.
#[derive(Error, Debug)]
pub enum MerakiError {
    /// The API key was rejected by the Meraki dashboard (HTTP 401).
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    /// The request was rejected as malformed (HTTP 400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The API key lacks permission for this action (HTTP 403).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The requested resource does not exist, either server-side
    /// (HTTP 404) or in a cached collection lookup.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The dashboard rate limit was exceeded (HTTP 429).
    ///
    /// `retry_after` carries the `Retry-After` header value in seconds
    /// when the dashboard provided one. The client never retries on its
    /// own.
    #[error("Rate limit exceeded")]
    RateLimited { retry_after: Option<u64> },

    /// The dashboard was unable to process the request (HTTP 5xx).
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// The API returned an error not covered by a dedicated variant.
    #[error("API error: {0}")]
    ApiError(String),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error parsing URL.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] UrlParseError),

    /// Error serializing or deserializing JSON.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A caller-supplied argument was rejected before any HTTP call.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No organization with the given name is visible to this API key.
    #[error("Organization not found: {0}")]
    OrganizationNotFound(String),

    /// No network with the given name exists in the organization.
    #[error("Network not found: {0}")]
    NetworkNotFound(String),

    /// No device with the given serial is present in the collection.
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// No VLAN matched the given selector.
    #[error("VLAN not found: {0}")]
    VlanNotFound(String),

    /// No SSID matched the given selector.
    #[error("SSID not found: {0}")]
    SsidNotFound(String),

    /// No policy object or group with the given id or name is cached.
    #[error("Policy object not found: {0}")]
    PolicyObjectNotFound(String),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),
}

/// Result type for Meraki API operations.
pub type MerakiResult<T> = Result<T, MerakiError>;
