mod sse;
pub mod studio;

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::{config::AppConfig, tokens::SeedConfig};

pub use self::sse::SseHub;
pub use self::studio::{Studio, StudioSnapshot};

pub type SharedState = Arc<AppState>;

/// Central application state: configuration plus the live studio registry.
pub struct AppState {
    config: AppConfig,
    studios: DashMap<Uuid, Arc<Studio>>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig) -> SharedState {
        Arc::new(Self {
            config,
            studios: DashMap::new(),
        })
    }

    /// Loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Register a studio seeded with `seed` and return it.
    pub fn create_studio(&self, seed: SeedConfig) -> Arc<Studio> {
        let studio = Arc::new(Studio::new(seed, self.config.sse_capacity()));
        self.studios.insert(studio.id(), studio.clone());
        studio
    }

    /// Look up a studio by identifier.
    pub fn studio(&self, id: Uuid) -> Option<Arc<Studio>> {
        self.studios.get(&id).map(|entry| entry.value().clone())
    }

    /// Remove a studio, returning it when it existed.
    pub fn remove_studio(&self, id: Uuid) -> Option<Arc<Studio>> {
        self.studios.remove(&id).map(|(_, studio)| studio)
    }

    /// Number of live studios.
    pub fn studio_count(&self) -> usize {
        self.studios.len()
    }
}
