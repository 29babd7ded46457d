//! Per-slot logo texture loading
//!
//! Loads are fire-and-forget: one task per brand slot in a [`JoinSet`], each
//! with its own state. The owning engine drains finished loads once per tick
//! without blocking. Dropping [`TextureSlots`] aborts whatever is in flight.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{Id as TaskId, JoinError, JoinSet};

use anoohe_model::{AssetRef, BrandCatalog};

use crate::error::TextureError;

/// Opaque handle to an uploaded logo texture.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TextureHandle {
    pub asset: AssetRef,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded(TextureHandle),
    Failed(TextureError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Fetches and decodes a logo. Implementations must be cancel-safe: a load
/// may be dropped at any await point when the showcase unmounts.
#[async_trait]
pub trait TextureLoader: Send + Sync {
    async fn load(&self, asset: &AssetRef) -> Result<TextureHandle, TextureError>;
}

type LoadResult = (usize, Result<TextureHandle, TextureError>);

#[derive(Debug)]
pub struct TextureSlots {
    states: Vec<LoadState>,
    tasks: JoinSet<LoadResult>,
    task_slots: HashMap<TaskId, usize>,
}

impl TextureSlots {
    pub fn new(distinct: usize) -> Self {
        Self {
            states: vec![LoadState::Loading; distinct],
            tasks: JoinSet::new(),
            task_slots: HashMap::new(),
        }
    }

    /// Start one load per brand. Must be called inside a tokio runtime.
    /// Loads from an earlier call are aborted and their results discarded.
    pub fn spawn_all(
        &mut self,
        catalog: &BrandCatalog,
        loader: Arc<dyn TextureLoader>,
    ) {
        if !self.task_slots.is_empty() {
            tracing::debug!(
                stale = self.task_slots.len(),
                "restarting logo loads"
            );
            self.tasks.abort_all();
            self.task_slots.clear();
        }
        for (slot, brand) in catalog.brands().iter().enumerate() {
            if slot >= self.states.len() {
                break;
            }
            self.states[slot] = LoadState::Loading;
            let loader = Arc::clone(&loader);
            let asset = brand.logo.clone();
            let handle = self.tasks.spawn(async move {
                (slot, loader.load(&asset).await)
            });
            self.task_slots.insert(handle.id(), slot);
        }
        tracing::debug!(count = self.task_slots.len(), "logo loads started");
    }

    /// Apply every load that finished since the last call. Returns the
    /// number of slots whose state changed.
    pub fn poll(&mut self, catalog: &BrandCatalog) -> usize {
        let mut changed = 0;
        while let Some(joined) = self.tasks.try_join_next_with_id() {
            changed += usize::from(self.apply(catalog, joined));
        }
        changed
    }

    /// Wait until every outstanding load has finished and apply the results.
    pub async fn settle(&mut self, catalog: &BrandCatalog) -> usize {
        let mut changed = 0;
        while let Some(joined) = self.tasks.join_next_with_id().await {
            changed += usize::from(self.apply(catalog, joined));
        }
        changed
    }

    fn apply(
        &mut self,
        catalog: &BrandCatalog,
        joined: Result<(TaskId, LoadResult), JoinError>,
    ) -> bool {
        let (slot, state) = match joined {
            Ok((id, (slot, result))) => {
                // Tasks from a superseded batch no longer own their slot.
                if self.task_slots.remove(&id).is_none() {
                    return false;
                }
                match result {
                    Ok(handle) => (slot, LoadState::Loaded(handle)),
                    Err(err) => {
                        let brand = catalog
                            .brand(slot)
                            .map(|b| b.name.as_str())
                            .unwrap_or("?");
                        tracing::warn!(%brand, error = %err, "failed to load logo");
                        (slot, LoadState::Failed(err))
                    }
                }
            }
            Err(join_err) => {
                let Some(slot) = self.task_slots.remove(&join_err.id()) else {
                    return false;
                };
                let err = if join_err.is_cancelled() {
                    TextureError::Aborted
                } else {
                    TextureError::Decode(format!("loader panicked: {join_err}"))
                };
                tracing::warn!(slot, error = %err, "logo load did not complete");
                (slot, LoadState::Failed(err))
            }
        };
        match self.states.get_mut(slot) {
            Some(entry) => {
                *entry = state;
                true
            }
            None => false,
        }
    }

    pub fn state(&self, slot: usize) -> Option<&LoadState> {
        self.states.get(slot)
    }

    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Abort outstanding loads. Their slots become `Failed(Aborted)` on the
    /// next [`poll`](Self::poll).
    pub fn abort_all(&mut self) {
        self.tasks.abort_all();
    }
}

/// Loader that answers from memory after a fixed latency. Used by the CLI
/// simulator and demos; assets whose reference contains any of the `failing`
/// fragments fail with a network error.
#[derive(Debug, Clone, Default)]
pub struct SimulatedTextureLoader {
    pub latency: Duration,
    pub failing: HashSet<String>,
}

#[async_trait]
impl TextureLoader for SimulatedTextureLoader {
    async fn load(&self, asset: &AssetRef) -> Result<TextureHandle, TextureError> {
        tokio::time::sleep(self.latency).await;
        if self.failing.iter().any(|f| asset.as_str().contains(f.as_str())) {
            return Err(TextureError::Network(format!(
                "simulated failure for {asset}"
            )));
        }
        let width = asset
            .as_str()
            .rsplit_once("width=")
            .and_then(|(_, w)| w.parse().ok())
            .unwrap_or(128);
        Ok(TextureHandle {
            asset: asset.clone(),
            width,
            height: width / 2,
        })
    }
}
