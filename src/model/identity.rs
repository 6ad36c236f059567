//! Player photo identities: the offline registry and the shared lookup cache

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use super::player::normalize_name;

/// Offline registry snapshot keyed by lowercase `"first last"`
#[derive(Debug, Clone, Default)]
pub struct IdentityRegistry {
    ids: HashMap<String, String>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one person; blank ids are ignored
    pub fn insert(&mut self, first: &str, last: &str, id: &str) {
        let id = id.trim();
        if id.is_empty() {
            return;
        }
        let key = format!(
            "{} {}",
            first.trim().to_lowercase(),
            last.trim().to_lowercase()
        );
        self.ids.insert(key, id.to_string());
    }

    /// Look up a full name by its first and last whitespace-delimited tokens
    pub fn lookup(&self, full_name: &str) -> Option<&str> {
        let key = registry_key(full_name)?;
        self.ids.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// `"first last"` lowercase key, `None` for single-token names
pub fn registry_key(full_name: &str) -> Option<String> {
    let lowered = full_name.trim().to_lowercase();
    let mut tokens = lowered.split_whitespace();
    let first = tokens.next()?;
    let last = tokens.last()?;
    Some(format!("{} {}", first, last))
}

/// Name -> photo id cache shared between renders.
///
/// Writes are last-writer-wins; resolution is deterministic per name so
/// racing writers store the same value. Entries are kept sorted so a saved
/// cache is stable between runs.
#[derive(Debug, Default)]
pub struct IdentityCache {
    entries: RwLock<BTreeMap<String, String>>,
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (normalize_name(&k), v))
            .collect();
        Self {
            entries: RwLock::new(map),
        }
    }

    pub fn get(&self, name: &str) -> Option<String> {
        let guard = self.entries.read().unwrap_or_else(|e| e.into_inner());
        guard.get(&normalize_name(name)).cloned()
    }

    pub fn insert(&self, name: &str, id: &str) {
        let mut guard = self.entries.write().unwrap_or_else(|e| e.into_inner());
        guard.insert(normalize_name(name), id.to_string());
    }

    /// Drop a cached id so the next resolution goes back to the sources
    pub fn invalidate(&self, name: &str) -> Option<String> {
        let mut guard = self.entries.write().unwrap_or_else(|e| e.into_inner());
        guard.remove(&normalize_name(name))
    }

    /// Sorted copy of every entry, for persistence
    pub fn snapshot(&self) -> Vec<(String, String)> {
        let guard = self.entries.read().unwrap_or_else(|e| e.into_inner());
        guard.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    pub fn len(&self) -> usize {
        let guard = self.entries.read().unwrap_or_else(|e| e.into_inner());
        guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
