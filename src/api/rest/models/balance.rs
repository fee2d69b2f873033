use serde::Deserialize;

use super::serde_util;

/// Available balance for a single asset.
///
/// The API reports the amount as either a JSON number or a numeric string;
/// both deserialize to the same value.
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    #[serde(deserialize_with = "serde_util::string_or_float::deserialize")]
    available: f64,
}

impl Balance {
    /// Returns the available (non-reserved) amount.
    pub fn available(&self) -> f64 {
        self.available
    }
}
