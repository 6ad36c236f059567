//! CSV loaders for the roster and the reference tables
//!
//! Each table has a `parse_*` function over any reader (used by tests) and a
//! `load_*` wrapper that opens a path.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::error::LoadError;
use crate::model::{
    fields, normalize_name, GradeLabel, LogoTable, PlayerRecord, RankTables, ScoutingEntry,
    ScoutingTable, TableAttributes, ATTRIBUTE_FIELDS,
};

/// Roster rows in file order; the order defines the internal ranking
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub players: Vec<PlayerRecord>,
    /// Rank by data row, counted before nameless rows are dropped
    ranks: HashMap<String, String>,
}

impl Roster {
    /// Internal ranks by roster position
    pub fn internal_ranks(&self) -> HashMap<String, String> {
        self.ranks.clone()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

fn column(headers: &StringRecord, table: &'static str, name: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| LoadError::MissingColumn {
            table,
            column: name.to_string(),
        })
}

fn optional_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

fn cell(record: &StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| record.get(i)).unwrap_or_default().trim()
}

fn open(path: &Path) -> Result<File, LoadError> {
    Ok(File::open(path)?)
}

pub fn parse_roster<R: Read>(rdr: R) -> Result<Roster, LoadError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let headers = reader.headers()?.clone();
    let name_idx = column(&headers, "roster", fields::NAME)?;

    let mut players = Vec::new();
    let mut order = Vec::new();
    for result in reader.records() {
        let record = result?;
        order.push(cell(&record, Some(name_idx)).to_string());
        let values: HashMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.trim().to_string(), v.to_string()))
            .collect();
        // Rows without a name cannot be keyed or drawn
        if let Some(player) = PlayerRecord::new(values) {
            players.push(player);
        }
    }
    let mut ranks = RankTables::internal_from_order(order.iter().map(String::as_str));
    ranks.remove("");
    Ok(Roster { players, ranks })
}

pub fn load_roster(path: &Path) -> Result<Roster, LoadError> {
    let roster = parse_roster(open(path)?)?;
    log::info!("Loaded {} players from {}", roster.len(), path.display());
    Ok(roster)
}

/// Top 100 list: `Prospects` and `Rank`. Numeric ranks lose leading zeros;
/// other non-empty text is kept as written.
pub fn parse_top100<R: Read>(rdr: R) -> Result<HashMap<String, String>, LoadError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let headers = reader.headers()?.clone();
    let name_idx = column(&headers, "top 100", "Prospects")?;
    let rank_idx = optional_column(&headers, "Rank");

    let mut ranks = HashMap::new();
    for result in reader.records() {
        let record = result?;
        let rank = cell(&record, rank_idx);
        if rank.is_empty() {
            continue;
        }
        let rank = match rank.parse::<u32>() {
            Ok(n) if rank.chars().all(|c| c.is_ascii_digit()) => n.to_string(),
            _ => rank.to_string(),
        };
        ranks.insert(normalize_name(cell(&record, Some(name_idx))), rank);
    }
    Ok(ranks)
}

pub fn load_top100(path: &Path) -> Result<HashMap<String, String>, LoadError> {
    let ranks = parse_top100(open(path)?)?;
    log::info!("Loaded {} top 100 ranks from {}", ranks.len(), path.display());
    Ok(ranks)
}

/// Scouting list. The name column is matched case-insensitively; missing
/// grade columns leave those grades blank.
pub fn parse_scouting<R: Read>(rdr: R) -> Result<ScoutingTable, LoadError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let headers = reader.headers()?.clone();
    let name_idx = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case("name"))
        .ok_or_else(|| LoadError::MissingColumn {
            table: "scouting",
            column: "Name".to_string(),
        })?;
    let position_idx = optional_column(&headers, fields::POSITION);
    let grade_idx: Vec<(GradeLabel, Option<usize>)> = GradeLabel::ALL
        .iter()
        .map(|label| (*label, optional_column(&headers, label.column())))
        .collect();

    let mut entries = HashMap::new();
    for result in reader.records() {
        let record = result?;
        let grades = grade_idx
            .iter()
            .map(|(label, idx)| (*label, cell(&record, *idx).to_string()))
            .collect();
        let entry = ScoutingEntry {
            position: cell(&record, position_idx).to_string(),
            grades,
        };
        entries.insert(normalize_name(cell(&record, Some(name_idx))), entry);
    }
    Ok(ScoutingTable::new(entries))
}

pub fn load_scouting(path: &Path) -> Result<ScoutingTable, LoadError> {
    let table = parse_scouting(open(path)?)?;
    log::info!("Loaded {} scouting rows from {}", table.len(), path.display());
    Ok(table)
}

/// Team logos: `TeamShort` and `url`
pub fn parse_logos<R: Read>(rdr: R) -> Result<LogoTable, LoadError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let headers = reader.headers()?.clone();
    let team_idx = column(&headers, "logos", "TeamShort")?;
    let url_idx = column(&headers, "logos", "url")?;

    let mut urls = HashMap::new();
    for result in reader.records() {
        let record = result?;
        let team = cell(&record, Some(team_idx)).to_uppercase();
        let url = cell(&record, Some(url_idx));
        if team.is_empty() || url.is_empty() {
            continue;
        }
        urls.insert(team, url.to_string());
    }
    Ok(LogoTable::new(urls))
}

pub fn load_logos(path: &Path) -> Result<LogoTable, LoadError> {
    let table = parse_logos(open(path)?)?;
    log::info!("Loaded {} team logos from {}", table.len(), path.display());
    Ok(table)
}

/// Side table of team/level/position keyed by `Name`
pub fn parse_attributes<R: Read>(rdr: R) -> Result<TableAttributes, LoadError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let headers = reader.headers()?.clone();
    let name_idx = column(&headers, "attributes", fields::NAME)?;
    let field_idx: Vec<(&str, Option<usize>)> = ATTRIBUTE_FIELDS
        .iter()
        .map(|field| (*field, optional_column(&headers, field)))
        .collect();

    let mut table = TableAttributes::new();
    for result in reader.records() {
        let record = result?;
        let name = cell(&record, Some(name_idx));
        if name.is_empty() {
            continue;
        }
        for (field, idx) in &field_idx {
            table.insert(name, field, cell(&record, *idx));
        }
    }
    Ok(table)
}

pub fn load_attributes(path: &Path) -> Result<TableAttributes, LoadError> {
    let table = parse_attributes(open(path)?)?;
    log::info!("Loaded attributes for {} players from {}", table.len(), path.display());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nameless_rows_skipped_but_still_ranked() {
        let csv_data = "\
Name,Team,HR,K.
Jackson Holliday,BAL,18,0.21
,SEA,4,0.3
Ethan Salas,SD,12,0.19
";
        let roster = parse_roster(csv_data.as_bytes()).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.players[1].name(), "Ethan Salas");
        assert_eq!(roster.players[0].stat("K%"), "0.21");

        let ranks = roster.internal_ranks();
        assert_eq!(ranks.get("JACKSON HOLLIDAY").map(String::as_str), Some("1"));
        assert_eq!(ranks.get("ETHAN SALAS").map(String::as_str), Some("3"));
        assert_eq!(ranks.len(), 2);
    }

    #[test]
    fn test_roster_requires_name_column() {
        let err = parse_roster("Team,HR\nBAL,3\n".as_bytes());
        assert!(matches!(err, Err(LoadError::MissingColumn { .. })));
    }

    #[test]
    fn test_top100_normalizes_numbers() {
        let csv_data = "\
Prospects,Rank
jackson holliday,001
Ethan Salas,HM
Nobody,
";
        let ranks = parse_top100(csv_data.as_bytes()).unwrap();
        assert_eq!(ranks.get("JACKSON HOLLIDAY").map(String::as_str), Some("1"));
        assert_eq!(ranks.get("ETHAN SALAS").map(String::as_str), Some("HM"));
        assert!(!ranks.contains_key("NOBODY"));
    }

    #[test]
    fn test_scouting_name_column_any_case() {
        let csv_data = "\
 NAME ,Position,OFP,Hit,Power
Ethan Salas,C,55,50,45
";
        let table = parse_scouting(csv_data.as_bytes()).unwrap();
        assert_eq!(table.position("ETHAN SALAS"), Some("C"));
        assert_eq!(table.grade("ETHAN SALAS", GradeLabel::Ofp), "55");
        assert_eq!(table.grade("ETHAN SALAS", GradeLabel::Run), "");
    }

    #[test]
    fn test_logos_keyed_by_uppercase_team() {
        let csv_data = "\
TeamShort,url
bal,https://example.com/bal.png
SD,
";
        let logos = parse_logos(csv_data.as_bytes()).unwrap();
        assert_eq!(logos.url_for("BAL"), Some("https://example.com/bal.png"));
        assert_eq!(logos.url_for("SD"), None);
    }

    #[test]
    fn test_attributes_table() {
        let csv_data = "\
Name,Team,Level
Ethan Salas,SD,AA
";
        let table = parse_attributes(csv_data.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
    }
}
