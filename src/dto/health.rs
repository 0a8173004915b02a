use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status, always "ok" once the router is serving.
    pub status: String,
    /// Number of live studios.
    pub studios: usize,
}

impl HealthResponse {
    /// Create a health response indicating the system is operational.
    pub fn ok(studios: usize) -> Self {
        Self {
            status: "ok".to_string(),
            studios,
        }
    }
}
