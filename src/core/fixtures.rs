//! Test/recording helpers for persisting HTTP fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("YF_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Fixture file name: `{endpoint}_{key}.{ext}`, with anything outside
/// `[A-Za-z0-9._-]` in the key replaced by `_`.
pub(crate) fn fixture_name(endpoint: &str, key: &str, ext: &str) -> String {
    let key: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{endpoint}_{key}.{ext}")
}

pub(crate) fn record_fixture(
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> Result<(), std::io::Error> {
    let dir = get_fixture_dir();
    fs::create_dir_all(&dir)?;
    let path = dir.join(fixture_name(endpoint, key, ext));
    fs::write(&path, body)?;
    tracing::debug!(path = %path.display(), "YF_RECORD: wrote fixture");
    Ok(())
}
