/// Stateless color conversions for the picker endpoints.
pub mod color_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Server-Sent Events message generation.
pub mod sse_events;
/// Server-Sent Events broadcasting service.
pub mod sse_service;
/// Studio session lifecycle and field setters.
pub mod studio_service;
/// One-shot token generation and export.
pub mod token_service;
