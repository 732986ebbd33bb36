//! Wire helpers shared by the endpoint modules.

use serde::{Deserialize, Deserializer};

use crate::core::YfError;

/// The `{ code, description }` object Yahoo puts in an envelope's `error` slot.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct ApiErrorNode {
    #[serde(default)]
    pub(crate) code: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
}

impl From<ApiErrorNode> for YfError {
    fn from(e: ApiErrorNode) -> Self {
        Self::Api {
            code: e.code.unwrap_or_default(),
            description: e.description.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyNumber {
    U64(u64),
    F64(f64),
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn any_to_u64<E: serde::de::Error>(n: AnyNumber) -> Result<u64, E> {
    match n {
        AnyNumber::U64(u) => Ok(u),
        AnyNumber::F64(f) if f.fract() == 0.0 && f >= 0.0 => Ok(f as u64),
        AnyNumber::F64(f) => Err(E::custom(format!("cannot convert float {f} to u64"))),
    }
}

/// Volumes sometimes arrive as `1.2e7`.
pub(crate) fn de_u64_from_any_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<AnyNumber>::deserialize(deserializer)?
        .map(any_to_u64)
        .transpose()
}

/// Column form of [`de_u64_from_any_number`]; `null` cells stay `None`.
pub(crate) fn de_u64_column<'de, D>(deserializer: D) -> Result<Vec<Option<u64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Option<AnyNumber>>::deserialize(deserializer)?
        .into_iter()
        .map(|cell| cell.map(any_to_u64).transpose())
        .collect()
}
