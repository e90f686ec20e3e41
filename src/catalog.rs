use anyhow::Context;

use crate::models::{LocationSuggestion, RouteOption};

static DEFAULT_ROUTES: &str = include_str!("data/routes.json");
static DEFAULT_LOCATIONS: &str = include_str!("data/locations.json");

/// Load the route catalog. An explicit path overrides the embedded dataset;
/// either way the list is read once at startup and never written again.
pub fn load_routes(path: Option<&str>) -> anyhow::Result<Vec<RouteOption>> {
    let raw = match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read route catalog from {p}"))?,
        None => DEFAULT_ROUTES.to_string(),
    };
    serde_json::from_str(&raw).context("failed to parse route catalog")
}

/// Load the gazetteer used by the local location backend.
pub fn load_locations(path: Option<&str>) -> anyhow::Result<Vec<LocationSuggestion>> {
    let raw = match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read gazetteer from {p}"))?,
        None => DEFAULT_LOCATIONS.to_string(),
    };
    serde_json::from_str(&raw).context("failed to parse gazetteer")
}
