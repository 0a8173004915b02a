use std::{sync::Arc, time::SystemTime};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    state::SseHub,
    tokens::{DesignTokens, SeedConfig, generate},
};

/// Seed and the token set generated from it, replaced together.
#[derive(Debug, Clone)]
pub struct StudioSnapshot {
    /// Seed the tokens were generated from.
    pub seed: Arc<SeedConfig>,
    /// Generated tokens.
    pub tokens: Arc<DesignTokens>,
    /// Bumped on every seed replacement, starting at 1.
    pub revision: u64,
    /// Time of the last replacement.
    pub updated_at: SystemTime,
}

impl StudioSnapshot {
    fn build(seed: SeedConfig, revision: u64) -> Self {
        let tokens = generate(&seed);
        Self {
            seed: Arc::new(seed),
            tokens: Arc::new(tokens),
            revision,
            updated_at: SystemTime::now(),
        }
    }
}

/// One editing session: a current seed snapshot plus its event stream.
pub struct Studio {
    id: Uuid,
    created_at: SystemTime,
    current: RwLock<StudioSnapshot>,
    hub: SseHub,
}

impl Studio {
    /// Create a studio and generate its first token set.
    pub fn new(seed: SeedConfig, sse_capacity: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: SystemTime::now(),
            current: RwLock::new(StudioSnapshot::build(seed, 1)),
            hub: SseHub::new(sse_capacity),
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Creation time.
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Broadcast hub for this studio's SSE stream.
    pub fn hub(&self) -> &SseHub {
        &self.hub
    }

    /// Clone of the current snapshot.
    pub async fn snapshot(&self) -> StudioSnapshot {
        self.current.read().await.clone()
    }

    /// Derive a new seed from the current one and regenerate from scratch.
    ///
    /// The write lock is held across the edit so concurrent setters apply in
    /// sequence and never lose each other's fields.
    pub async fn update_seed<F>(&self, edit: F) -> StudioSnapshot
    where
        F: FnOnce(SeedConfig) -> SeedConfig,
    {
        let mut guard = self.current.write().await;
        let next_seed = edit(guard.seed.as_ref().clone());
        let revision = guard.revision + 1;
        *guard = StudioSnapshot::build(next_seed, revision);
        guard.clone()
    }
}
