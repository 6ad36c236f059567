//! Picking one player out of the roster from a command-line selector

use crate::model::PlayerRecord;

/// Maximum number of candidates reported for an ambiguous selector
const MAX_CANDIDATES: usize = 10;

/// Outcome of matching a selector against the roster
#[derive(Debug, PartialEq)]
pub enum Selection<'a> {
    Found(&'a PlayerRecord),
    /// Several roster names contain the fragment
    Ambiguous(Vec<&'a str>),
    NotFound,
}

/// Match a selector against the roster.
///
/// Tried in order: exact name (case-insensitive), 1-based roster index,
/// then a name fragment that must match exactly one player.
pub fn select_player<'a>(players: &'a [PlayerRecord], selector: &str) -> Selection<'a> {
    let selector = selector.trim();
    if selector.is_empty() {
        return Selection::NotFound;
    }

    if let Some(player) = players
        .iter()
        .find(|p| p.name().eq_ignore_ascii_case(selector))
    {
        return Selection::Found(player);
    }

    if let Ok(index) = selector.parse::<usize>() {
        return match index.checked_sub(1).and_then(|i| players.get(i)) {
            Some(player) => Selection::Found(player),
            None => Selection::NotFound,
        };
    }

    let fragment = selector.to_lowercase();
    let matches: Vec<&PlayerRecord> = players
        .iter()
        .filter(|p| p.name().to_lowercase().contains(&fragment))
        .collect();

    match matches.as_slice() {
        [] => Selection::NotFound,
        [only] => Selection::Found(*only),
        many => Selection::Ambiguous(
            many.iter()
                .copied()
                .take(MAX_CANDIDATES)
                .map(PlayerRecord::name)
                .collect(),
        ),
    }
}
