use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub openai_api_key: String,
    pub openai_model: String,
    pub places_backend: String,
    pub google_maps_api_key: String,
    pub routes_path: Option<String>,
    pub locations_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            places_backend: env::var("PLACES_BACKEND").unwrap_or_else(|_| "local".to_string()),
            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY").unwrap_or_default(),
            routes_path: env::var("ROUTES_PATH").ok(),
            locations_path: env::var("LOCATIONS_PATH").ok(),
        }
    }
}
