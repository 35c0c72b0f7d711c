use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped field name → value data, before validation
///
/// Values are JSON strings or numbers; anything else fails validation.
pub type RawSettings = Map<String, Value>;

/// A catalog record with its display identifier and raw settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCandidate {
    pub id: String,
    pub settings: RawSettings,
}

impl RawCandidate {
    pub fn new(id: impl Into<String>, settings: RawSettings) -> Self {
        Self {
            id: id.into(),
            settings,
        }
    }
}

/// Build raw settings from string pairs, the shape query strings decode into
pub fn raw_settings_from_pairs<I, K, V>(pairs: I) -> RawSettings
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), Value::String(value.into())))
        .collect()
}
