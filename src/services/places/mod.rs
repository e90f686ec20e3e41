pub mod google;

use async_trait::async_trait;
use serde::Deserialize;

/// One autocomplete prediction from the remote places backend.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacePrediction {
    pub description: String,
    pub place_id: String,
}

#[async_trait]
pub trait PlacesProvider: Send + Sync {
    async fn autocomplete(&self, input: &str) -> anyhow::Result<Vec<PlacePrediction>>;
}
