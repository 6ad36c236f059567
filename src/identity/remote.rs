//! Remote player-id lookup service

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::LookupError;

/// One candidate returned by a lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRow {
    pub id: String,
    /// Team abbreviation, when the service reports one
    pub team: Option<String>,
}

/// A service that finds player ids by name
pub trait PlayerLookup: Send + Sync {
    fn lookup(&self, last: &str, first: &str) -> Result<Vec<LookupRow>, LookupError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    people: Vec<Person>,
}

#[derive(Debug, Deserialize)]
struct Person {
    id: u64,
    #[serde(rename = "currentTeam")]
    current_team: Option<TeamRef>,
}

#[derive(Debug, Deserialize)]
struct TeamRef {
    abbreviation: Option<String>,
}

impl From<Person> for LookupRow {
    fn from(person: Person) -> Self {
        LookupRow {
            id: person.id.to_string(),
            team: person.current_team.and_then(|t| t.abbreviation),
        }
    }
}

/// Player search on the MLB Stats API
pub struct StatsApiLookup {
    client: Client,
    url: String,
}

impl StatsApiLookup {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

impl PlayerLookup for StatsApiLookup {
    fn lookup(&self, last: &str, first: &str) -> Result<Vec<LookupRow>, LookupError> {
        let names = format!("{} {}", first, last);
        log::debug!("Querying {} for {}", self.url, names);

        let resp = self
            .client
            .get(&self.url)
            .query(&[("names", names.as_str()), ("hydrate", "currentTeam")])
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body: SearchResponse = resp.json()?;
        Ok(parse_people(body))
    }
}

fn parse_people(body: SearchResponse) -> Vec<LookupRow> {
    body.people.into_iter().map(LookupRow::from).collect()
}
