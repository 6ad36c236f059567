//! Fallback source for team, level and position

use std::collections::HashMap;

use crate::error::FetchError;

use super::player::{fields, normalize_name};

/// Supplies missing player attributes (`Team`, `Level`, `Position`).
///
/// Consulted only when a roster row leaves one of them blank; values it
/// returns never overwrite what the roster already has.
pub trait AttributeSource: Send + Sync {
    fn attributes(&self, name: &str) -> Result<HashMap<String, String>, FetchError>;
}

/// Attributes from a side table keyed by uppercase player name
#[derive(Debug, Clone, Default)]
pub struct TableAttributes {
    rows: HashMap<String, HashMap<String, String>>,
}

impl TableAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, field: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        self.rows
            .entry(normalize_name(name))
            .or_default()
            .insert(field.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl AttributeSource for TableAttributes {
    fn attributes(&self, name: &str) -> Result<HashMap<String, String>, FetchError> {
        Ok(self
            .rows
            .get(&normalize_name(name))
            .cloned()
            .unwrap_or_default())
    }
}

/// Columns a side table may provide
pub const ATTRIBUTE_FIELDS: [&str; 3] = [fields::TEAM, fields::LEVEL, fields::POSITION];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlayerRecord;

    #[test]
    fn test_table_lookup_is_case_insensitive() {
        let mut table = TableAttributes::new();
        table.insert("Ethan Salas", "Team", "SD");
        table.insert("Ethan Salas", "Level", " ");
        let attrs = table.attributes("ETHAN SALAS ").unwrap();
        assert_eq!(attrs.get("Team").map(String::as_str), Some("SD"));
        assert!(!attrs.contains_key("Level"));
        assert!(table.attributes("Nobody").unwrap().is_empty());
    }

    #[test]
    fn test_fill_only_missing() {
        let mut table = TableAttributes::new();
        table.insert("Ethan Salas", "Team", "XXX");
        table.insert("Ethan Salas", "Level", "AA");
        let player = PlayerRecord::from_pairs([("Name", "Ethan Salas"), ("Team", "SD")]).unwrap();
        let filled = player.with_attributes(&table.attributes(player.name()).unwrap());
        assert_eq!(filled.team(), Some("SD"));
        assert_eq!(filled.level(), Some("AA"));
    }
}
