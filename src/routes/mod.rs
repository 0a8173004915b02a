use axum::Router;

use crate::state::SharedState;

pub mod colors;
pub mod docs;
pub mod fonts;
pub mod health;
pub mod sse;
pub mod studios;
pub mod tokens;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(tokens::router())
        .merge(colors::router())
        .merge(fonts::router())
        .merge(studios::router())
        .merge(sse::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
