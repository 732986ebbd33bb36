use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum YfError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body was not valid JSON for the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// Yahoo throttled the request (HTTP 429).
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that returned 429.
        url: String,
    },

    /// Yahoo failed with a 5xx status.
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The cookie/crumb handshake failed.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Yahoo answered with an error object inside an otherwise valid payload.
    #[error("yahoo error: {code} - {description}")]
    Api {
        /// Upstream error code, e.g. `Not Found`.
        code: String,
        /// Upstream description.
        description: String,
    },

    /// The data received from the API was in an unexpected format.
    #[error("Data format unexpected: {0}")]
    Data(String),

    /// The payload was well formed but carried no usable result.
    #[error("Missing data: {0}")]
    MissingData(String),

    /// Caller supplied parameters that cannot be sent upstream.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// An invalid date range was provided for a historical data request (start must be before end).
    #[error("invalid date range: start must be before end")]
    InvalidDates,
}

impl YfError {
    /// Map a non-success HTTP status to the matching error variant.
    pub(crate) fn from_status(status: u16, url: &url::Url) -> Self {
        let url = url.to_string();
        match status {
            404 => Self::NotFound { url },
            429 => Self::RateLimited { url },
            500..=599 => Self::ServerError { status, url },
            _ => Self::Status { status, url },
        }
    }
}
