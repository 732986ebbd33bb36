#[cfg(feature = "test-mode")]
use std::env;

/// Hook run on every successful data response.
/// In `test-mode`, if `YF_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) fn record(_endpoint: &str, _key: &str, _ext: &str, _body: &str) {
    #[cfg(feature = "test-mode")]
    {
        if env::var("YF_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, _body)
        {
            tracing::warn!(key = _key, error = %e, "YF_RECORD: failed to write fixture");
        }
    }
}
