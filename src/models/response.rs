use chrono::{DateTime, Utc};
use serde::Serialize;

/// Success envelope shared by every endpoint. Failures are rendered by
/// `AppError` with the same shape and `success: false`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            timestamp: Utc::now(),
        }
    }
}
