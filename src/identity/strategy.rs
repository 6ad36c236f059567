//! Identity sources tried by the resolver, highest priority first

use std::sync::Arc;

use crate::model::{IdentityCache, IdentityRegistry};

use super::remote::{LookupRow, PlayerLookup};

/// One source of photo ids
pub trait IdentityStrategy: Send + Sync {
    /// Short name used in log messages
    fn name(&self) -> &'static str;

    /// Try to find an id for `name`; `None` means "not here, try the next source"
    fn attempt(&self, name: &str, team: Option<&str>) -> Option<String>;
}

/// Offline registry snapshot, looked up by first + last token
pub struct RegistryStrategy {
    registry: Arc<IdentityRegistry>,
}

impl RegistryStrategy {
    pub fn new(registry: Arc<IdentityRegistry>) -> Self {
        Self { registry }
    }
}

impl IdentityStrategy for RegistryStrategy {
    fn name(&self) -> &'static str {
        "registry"
    }

    fn attempt(&self, name: &str, _team: Option<&str>) -> Option<String> {
        self.registry.lookup(name).map(str::to_string)
    }
}

/// Previously resolved ids
pub struct CacheStrategy {
    cache: Arc<IdentityCache>,
}

impl CacheStrategy {
    pub fn new(cache: Arc<IdentityCache>) -> Self {
        Self { cache }
    }
}

impl IdentityStrategy for CacheStrategy {
    fn name(&self) -> &'static str {
        "cache"
    }

    fn attempt(&self, name: &str, _team: Option<&str>) -> Option<String> {
        self.cache.get(name)
    }
}

/// Remote player-id service, queried by last and first name
pub struct RemoteStrategy {
    lookup: Box<dyn PlayerLookup>,
}

impl RemoteStrategy {
    pub fn new(lookup: Box<dyn PlayerLookup>) -> Self {
        Self { lookup }
    }
}

impl IdentityStrategy for RemoteStrategy {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn attempt(&self, name: &str, team: Option<&str>) -> Option<String> {
        let tokens: Vec<&str> = name.split_whitespace().collect();
        let (first, last) = match tokens.as_slice() {
            [first, .., last] => (*first, *last),
            _ => return None,
        };

        match self.lookup.lookup(last, first) {
            Ok(rows) => pick_row(&rows, team).map(|row| row.id.clone()),
            Err(e) => {
                log::warn!("Player id lookup failed for {}: {}", name, e);
                None
            }
        }
    }
}

/// Prefer the row whose team matches the hint, otherwise the first row
pub fn pick_row<'a>(rows: &'a [LookupRow], team: Option<&str>) -> Option<&'a LookupRow> {
    let team = team.map(str::trim).filter(|t| !t.is_empty());
    team.and_then(|team| {
        rows.iter().find(|row| {
            row.team
                .as_deref()
                .is_some_and(|t| t.trim().eq_ignore_ascii_case(team))
        })
    })
    .or_else(|| rows.first())
}
