//! Library crate for chroma-tokens: the OKLCH converter, the token generator,
//! exports, and the HTTP service layers used by the binaries.

pub mod color;
pub mod config;
mod dto;
mod error;
pub mod export;
pub mod routes;
pub mod services;
pub mod state;
pub mod tokens;
