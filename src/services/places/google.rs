use anyhow::Context;
use async_trait::async_trait;

use super::{PlacePrediction, PlacesProvider};

pub struct GooglePlacesProvider {
    api_key: String,
    client: reqwest::Client,
}

impl GooglePlacesProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PlacesProvider for GooglePlacesProvider {
    async fn autocomplete(&self, input: &str) -> anyhow::Result<Vec<PlacePrediction>> {
        let resp = self
            .client
            .get("https://maps.googleapis.com/maps/api/place/autocomplete/json")
            .query(&[("input", input), ("key", self.api_key.as_str())])
            .send()
            .await
            .context("failed to call Places API")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse Places response")?;

        if !status.is_success() {
            anyhow::bail!("Places API error ({}): {}", status, data);
        }

        let predictions = data["predictions"].clone();
        if predictions.is_null() {
            return Ok(vec![]);
        }

        serde_json::from_value(predictions).context("unexpected Places prediction shape")
    }
}
