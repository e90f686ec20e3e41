use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ranking priority extracted from the user's message.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Cheapest,
    Fastest,
    Comfortable,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Structured travel query. Extraction is best-effort: either endpoint may be
/// absent, but `preference` is always populated (worst case `unknown`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelIntent {
    pub source: Option<String>,
    pub destination: Option<String>,
    #[serde(rename = "intent")]
    pub preference: Preference,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl TravelIntent {
    pub fn new(
        source: Option<String>,
        destination: Option<String>,
        preference: Preference,
    ) -> Self {
        Self {
            source,
            destination,
            preference,
            timestamp: Utc::now(),
        }
    }
}
