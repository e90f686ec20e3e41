use std::time::Instant;

use crate::config::AppConfig;
use crate::models::{LocationSuggestion, RouteOption};
use crate::services::ai::LlmProvider;
use crate::services::places::PlacesProvider;

/// Shared application state. The catalog and gazetteer are read-only after
/// startup, so handlers can read them concurrently without locking. The
/// remote capabilities are explicit options: `None` means "not configured",
/// which is distinct from a configured provider that fails at call time.
pub struct AppState {
    pub config: AppConfig,
    pub llm: Option<Box<dyn LlmProvider>>,
    pub places: Option<Box<dyn PlacesProvider>>,
    pub routes: Vec<RouteOption>,
    pub gazetteer: Vec<LocationSuggestion>,
    pub started_at: Instant,
}
