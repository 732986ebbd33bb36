//! The HTTP seam underneath [`YfClient`](crate::YfClient).
//!
//! Every request the crate makes is a plain GET described by [`HttpRequest`].
//! The default [`ReqwestTransport`] sends it with `reqwest`; tests and callers
//! with special networking needs can plug in their own [`Transport`].


use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::header::{ACCEPT, COOKIE, SET_COOKIE, USER_AGENT};
use url::Url;

use crate::core::YfError;

/// Boxed future returned by [`Transport::get`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<HttpResponse, YfError>> + Send + 'a>>;

/// A GET request as issued by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Fully built URL, query string included.
    pub url: Url,
    /// User-Agent header value.
    pub user_agent: String,
    /// `Cookie` header value, if a session is attached.
    pub cookie: Option<String>,
}

/// The parts of an HTTP response the client looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Final URL after redirects.
    pub url: Url,
    /// HTTP status code.
    pub status: u16,
    /// Raw `Set-Cookie` header values, in order.
    pub set_cookies: Vec<String>,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// `true` for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends GET requests on behalf of the client.
///
/// Implementations must not follow the crumb/cookie protocol themselves; the
/// client attaches session data to each [`HttpRequest`].
pub trait Transport: Send + Sync + fmt::Debug {
    /// Perform a GET request.
    fn get(&self, request: HttpRequest) -> TransportFuture<'_>;
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Wrap an existing `reqwest::Client`.
    ///
    /// The client should not run its own cookie store: the session cookie is
    /// attached explicitly on every request.
    #[must_use]
    pub const fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    pub(crate) fn with_timeouts(
        timeout: Option<Duration>,
        connect_timeout: Option<Duration>,
    ) -> Result<Self, YfError> {
        let mut httpb = reqwest::Client::builder();
        if let Some(t) = timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        Ok(Self::new(httpb.build()?))
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, request: HttpRequest) -> TransportFuture<'_> {
        Box::pin(async move {
            let mut req = self
                .http
                .get(request.url)
                .header(USER_AGENT, request.user_agent)
                .header(ACCEPT, "application/json, text/plain, */*");
            if let Some(cookie) = request.cookie {
                req = req.header(COOKIE, cookie);
            }

            let resp = req.send().await?;
            let status = resp.status().as_u16();
            let url = resp.url().clone();
            let set_cookies = resp
                .headers()
                .get_all(SET_COOKIE)
                .iter()
                .filter_map(|v| v.to_str().ok())
                .map(str::to_owned)
                .collect();
            let body = resp.text().await?;

            Ok(HttpResponse {
                url,
                status,
                set_cookies,
                body,
            })
        })
    }
}
