use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransportMode {
    Bus,
    Auto,
    Cab,
    Metro,
    Walk,
    Bike,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ComfortLevel {
    Basic,
    Standard,
    Premium,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Limited,
    Unavailable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Traffic {
    Light,
    Moderate,
    Heavy,
}

/// One candidate trip in the static catalog. Loaded once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteOption {
    pub id: String,
    pub from: String,
    pub to: String,
    pub mode: TransportMode,
    pub cost: f64,
    pub time_min: u32,
    pub comfort: ComfortLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic: Option<Traffic>,
}

/// Explicit numeric/categorical constraints accompanying an intent. Each
/// field is independent; an absent field imposes no restriction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteConstraints {
    pub max_cost: Option<f64>,
    pub max_time_min: Option<u32>,
    pub modes: Option<Vec<TransportMode>>,
}
