//! Cookie & crumb acquisition for Yahoo endpoints.

use serde::Serialize;

use crate::core::error::YfError;

/// The credentials Yahoo expects on data requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    /// `Cookie` header value (`name=value` pairs joined by `; `).
    pub cookie: String,
    /// Anti-automation token sent as the `crumb` query parameter.
    pub crumb: String,
}

impl super::YfClient {
    /// Return the current session, running the cookie/crumb handshake first if
    /// there is none.
    pub(crate) async fn ensure_session(&self) -> Result<Session, YfError> {
        // Fast path: check if credentials exist with a read lock.
        if let Some(session) = self.state.read().await.as_ref() {
            return Ok(session.clone());
        }

        // Slow path: only one task runs the handshake.
        let _guard = self.credential_fetch_lock.lock().await;

        // Another task may have finished the handshake while this one waited.
        if let Some(session) = self.state.read().await.as_ref() {
            return Ok(session.clone());
        }

        let cookie = self.fetch_cookie().await?;
        let crumb = self.fetch_crumb(&cookie).await?;
        tracing::debug!("session established");

        let session = Session { cookie, crumb };
        *self.state.write().await = Some(session.clone());
        Ok(session)
    }

    /// The session currently held by this client (and its clones), if any.
    pub async fn session(&self) -> Option<Session> {
        self.state.read().await.clone()
    }

    /// Drop the stored cookie + crumb; the next request repeats the handshake.
    pub async fn invalidate_session(&self) {
        *self.state.write().await = None;
    }

    async fn fetch_cookie(&self) -> Result<String, YfError> {
        // fc.yahoo.com answers 404 but still sets the cookie, so status is not checked.
        let resp = self.send(self.cookie_url.clone(), None).await?;

        let cookie = cookie_header(&resp.set_cookies);
        if cookie.is_empty() {
            return Err(YfError::Auth(format!(
                "No cookie received from {}",
                self.cookie_url
            )));
        }
        tracing::debug!(count = resp.set_cookies.len(), "received session cookies");
        Ok(cookie)
    }

    async fn fetch_crumb(&self, cookie: &str) -> Result<String, YfError> {
        let resp = self
            .send(self.crumb_url.clone(), Some(cookie.to_string()))
            .await?;
        if !resp.is_success() {
            return Err(YfError::Auth(format!(
                "crumb endpoint returned status {}",
                resp.status
            )));
        }

        let crumb = resp.body.trim().to_string();
        if crumb.is_empty() || crumb.contains('{') || crumb.contains('<') {
            return Err(YfError::Auth(format!("Received invalid crumb: {crumb}")));
        }
        Ok(crumb)
    }
}

/// Reduce raw `Set-Cookie` values to a `Cookie` request header.
fn cookie_header(set_cookies: &[String]) -> String {
    set_cookies
        .iter()
        .filter_map(|raw| raw.split(';').next())
        .map(str::trim)
        .filter(|pair| pair.contains('='))
        .collect::<Vec<_>>()
        .join("; ")
}
