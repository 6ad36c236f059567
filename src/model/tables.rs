//! Read-only reference tables consulted while drawing a card
//!
//! All tables are keyed by normalized names (see [`normalize_name`]) and are
//! built once by the loaders, then shared by reference across renders.

use std::collections::HashMap;

use super::player::normalize_name;
use crate::config::defaults::RANK_SENTINEL;

/// Scouting grade columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeLabel {
    Ofp,
    Hit,
    Power,
    Field,
    Arm,
    Run,
}

impl GradeLabel {
    pub const ALL: [GradeLabel; 6] = [
        GradeLabel::Ofp,
        GradeLabel::Hit,
        GradeLabel::Power,
        GradeLabel::Field,
        GradeLabel::Arm,
        GradeLabel::Run,
    ];

    /// Column name in the scouting table
    pub fn column(&self) -> &'static str {
        match self {
            GradeLabel::Ofp => "OFP",
            GradeLabel::Hit => "Hit",
            GradeLabel::Power => "Power",
            GradeLabel::Field => "Field",
            GradeLabel::Arm => "Arm",
            GradeLabel::Run => "Run",
        }
    }
}

/// Top 100 and internal rank lookups
#[derive(Debug, Clone, Default)]
pub struct RankTables {
    top100: HashMap<String, String>,
    internal: HashMap<String, String>,
}

impl RankTables {
    pub fn new(top100: HashMap<String, String>, internal: HashMap<String, String>) -> Self {
        Self { top100, internal }
    }

    /// Internal rank is the 1-based position of each name in ranking order.
    /// A repeated name keeps the rank of its first row.
    pub fn internal_from_order<'a, I>(names: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ranks = HashMap::new();
        for (idx, name) in names.into_iter().enumerate() {
            ranks
                .entry(normalize_name(name))
                .or_insert_with(|| (idx + 1).to_string());
        }
        ranks
    }

    /// Top 100 rank for display, `"NR"` when unranked
    pub fn top100(&self, key: &str) -> &str {
        self.top100
            .get(key)
            .map(String::as_str)
            .unwrap_or(RANK_SENTINEL)
    }

    /// Internal rank for display, `"NR"` when unranked
    pub fn internal(&self, key: &str) -> &str {
        self.internal
            .get(key)
            .map(String::as_str)
            .unwrap_or(RANK_SENTINEL)
    }
}

/// One player's scouting row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoutingEntry {
    pub position: String,
    pub grades: HashMap<GradeLabel, String>,
}

impl ScoutingEntry {
    /// Raw grade text; empty when the grade is missing
    pub fn grade(&self, label: GradeLabel) -> &str {
        self.grades.get(&label).map(String::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScoutingTable {
    entries: HashMap<String, ScoutingEntry>,
}

impl ScoutingTable {
    pub fn new(entries: HashMap<String, ScoutingEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&ScoutingEntry> {
        self.entries.get(key)
    }

    /// Scouted position; `None` when unscouted or blank
    pub fn position(&self, key: &str) -> Option<&str> {
        self.get(key)
            .map(|e| e.position.trim())
            .filter(|p| !p.is_empty())
    }

    /// Raw grade text; empty for unscouted players and missing grades
    pub fn grade(&self, key: &str, label: GradeLabel) -> &str {
        self.get(key).map(|e| e.grade(label)).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Team abbreviation -> logo URL
#[derive(Debug, Clone, Default)]
pub struct LogoTable {
    urls: HashMap<String, String>,
}

impl LogoTable {
    pub fn new(urls: HashMap<String, String>) -> Self {
        Self { urls }
    }

    pub fn url_for(&self, team: &str) -> Option<&str> {
        self.urls
            .get(&team.trim().to_uppercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Every read-only table a render consults
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    pub ranks: RankTables,
    pub scouting: ScoutingTable,
    pub logos: LogoTable,
}
