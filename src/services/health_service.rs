use tracing::debug;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with a static health payload carrying the live studio count.
pub fn health_status(state: &SharedState) -> HealthResponse {
    let studios = state.studio_count();
    debug!(studios, "health check");
    HealthResponse::ok(studios)
}
