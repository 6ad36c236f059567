use std::collections::HashMap;

/// Roster column names the card reads
pub mod fields {
    pub const NAME: &str = "Name";
    pub const TEAM: &str = "Team";
    pub const LEVEL: &str = "Level";
    pub const POSITION: &str = "Position";
    pub const SCORE: &str = "Score";
}

/// Columns an attribute fallback may fill in
const FILLABLE_FIELDS: [&str; 3] = [fields::TEAM, fields::LEVEL, fields::POSITION];

/// One roster row: column name -> raw string value.
///
/// A record always carries a non-empty `Name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    fields: HashMap<String, String>,
}

impl PlayerRecord {
    /// Build a record, or `None` when the `Name` field is missing or blank
    pub fn new(values: HashMap<String, String>) -> Option<Self> {
        let has_name = values
            .get(fields::NAME)
            .is_some_and(|name| !name.trim().is_empty());
        has_name.then_some(Self { fields: values })
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Display name as it appears in the roster (trimmed)
    pub fn name(&self) -> &str {
        self.fields
            .get(fields::NAME)
            .map(|name| name.trim())
            .unwrap_or_default()
    }

    /// Key used by every name-keyed reference table
    pub fn lookup_key(&self) -> String {
        normalize_name(self.name())
    }

    /// Trimmed field value; blank values count as absent
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn team(&self) -> Option<&str> {
        self.get(fields::TEAM)
    }

    pub fn level(&self) -> Option<&str> {
        self.get(fields::LEVEL)
    }

    pub fn position(&self) -> Option<&str> {
        self.get(fields::POSITION)
    }

    pub fn score(&self) -> Option<&str> {
        self.get(fields::SCORE)
    }

    /// Raw value for a stat label, falling back to the roster export's
    /// aliased column (`K.` for `K%` and so on). Empty when absent.
    pub fn stat(&self, label: &str) -> &str {
        std::iter::once(label)
            .chain(stat_alias(label))
            .find_map(|key| self.get(key))
            .unwrap_or_default()
    }

    /// Copy of this record with absent team/level/position filled from
    /// `attributes`. Present values are never overwritten.
    pub fn with_attributes(&self, attributes: &HashMap<String, String>) -> Self {
        let mut values = self.fields.clone();
        for field in FILLABLE_FIELDS {
            if self.get(field).is_some() {
                continue;
            }
            if let Some(value) = attributes.get(field).filter(|v| !v.trim().is_empty()) {
                values.insert(field.to_string(), value.trim().to_string());
            }
        }
        Self { fields: values }
    }
}

/// Column name used by the roster export for labels containing `%` or `+`
fn stat_alias(label: &str) -> Option<&'static str> {
    match label {
        "K%" => Some("K."),
        "BB%" => Some("BB."),
        "wRC+" => Some("wRC."),
        _ => None,
    }
}

/// Normalize a player name into a reference-table key
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        assert!(PlayerRecord::from_pairs([("Team", "BAL")]).is_none());
        assert!(PlayerRecord::from_pairs([("Name", "   ")]).is_none());
        let player = PlayerRecord::from_pairs([("Name", " Jackson Holliday ")]).unwrap();
        assert_eq!(player.name(), "Jackson Holliday");
        assert_eq!(player.lookup_key(), "JACKSON HOLLIDAY");
    }

    #[test]
    fn test_stat_aliases() {
        let player = PlayerRecord::from_pairs([
            ("Name", "Ethan Salas"),
            ("K.", "0.21"),
            ("BB%", "0.09"),
            ("BB.", "0.5"),
            ("HR", "23"),
        ])
        .unwrap();
        assert_eq!(player.stat("K%"), "0.21");
        // canonical column wins over the alias
        assert_eq!(player.stat("BB%"), "0.09");
        assert_eq!(player.stat("HR"), "23");
        assert_eq!(player.stat("SB"), "");
    }

    #[test]
    fn test_blank_fields_are_absent() {
        let player =
            PlayerRecord::from_pairs([("Name", "Ethan Salas"), ("Team", "  ")]).unwrap();
        assert_eq!(player.team(), None);
        assert_eq!(player.level(), None);
    }

    #[test]
    fn test_with_attributes_fills_only_missing() {
        let player = PlayerRecord::from_pairs([
            ("Name", "Ethan Salas"),
            ("Team", "SD"),
            ("Level", ""),
        ])
        .unwrap();
        let attributes: HashMap<String, String> = [
            ("Team", "NYY"),
            ("Level", "AA"),
            ("Position", "C"),
            ("Name", "Someone Else"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let filled = player.with_attributes(&attributes);
        assert_eq!(filled.team(), Some("SD"));
        assert_eq!(filled.level(), Some("AA"));
        assert_eq!(filled.position(), Some("C"));
        assert_eq!(filled.name(), "Ethan Salas");
    }
}
