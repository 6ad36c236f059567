//! Resolving a player name to the id used for the headshot image
//!
//! Sources are tried in priority order and the first hit wins:
//! the offline registry, then the identity cache, then the remote lookup
//! service. Every hit is written back to the cache under the player's
//! normalized name, so repeated renders never go back to the network.

pub mod remote;
pub mod strategy;

use std::sync::Arc;

use crate::error::IdentityError;
use crate::model::{IdentityCache, IdentityRegistry};

pub use remote::{LookupRow, PlayerLookup, StatsApiLookup};
pub use strategy::{pick_row, CacheStrategy, IdentityStrategy, RegistryStrategy, RemoteStrategy};

/// Ordered chain of identity sources backed by a shared cache
pub struct IdentityResolver {
    strategies: Vec<Box<dyn IdentityStrategy>>,
    cache: Arc<IdentityCache>,
}

impl IdentityResolver {
    /// Resolver with an explicit strategy order
    pub fn new(strategies: Vec<Box<dyn IdentityStrategy>>, cache: Arc<IdentityCache>) -> Self {
        Self { strategies, cache }
    }

    /// Registry, then cache, then (if given) the remote lookup service
    pub fn standard(
        registry: Arc<IdentityRegistry>,
        cache: Arc<IdentityCache>,
        remote: Option<Box<dyn PlayerLookup>>,
    ) -> Self {
        let mut strategies: Vec<Box<dyn IdentityStrategy>> = vec![
            Box::new(RegistryStrategy::new(registry)),
            Box::new(CacheStrategy::new(Arc::clone(&cache))),
        ];
        if let Some(lookup) = remote {
            strategies.push(Box::new(RemoteStrategy::new(lookup)));
        }
        Self::new(strategies, cache)
    }

    pub fn cache(&self) -> &Arc<IdentityCache> {
        &self.cache
    }

    /// Resolve `name` to a photo id. Not finding one is `Ok(None)`.
    pub fn resolve(&self, name: &str, team: Option<&str>) -> Result<Option<String>, IdentityError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(IdentityError::EmptyName);
        }

        for strategy in &self.strategies {
            if let Some(id) = strategy.attempt(name, team) {
                log::debug!("Resolved {} -> {} via {}", name, id, strategy.name());
                self.cache.insert(name, &id);
                return Ok(Some(id));
            }
        }

        log::info!("No player id found for {}", name);
        Ok(None)
    }
}
