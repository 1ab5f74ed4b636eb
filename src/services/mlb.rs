//! Client for the MLB Stats API.
//!
//! Each operation issues exactly one GET and then reshapes the JSON envelope
//! into local models. No retries: a non-2xx answer fails the call, and a 2xx
//! answer with an unexpected body fails with `UpstreamError::Schema`.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::UpstreamSettings;
use crate::error::UpstreamError;
use crate::models::{Player, PlayerStats, RosterPlayer, SearchResponse, Team};

/// Upstream sport id for Major League Baseball
const MLB_SPORT_ID: &str = "1";

pub type Query = Vec<(&'static str, String)>;

#[derive(Debug, Clone)]
pub struct MlbService {
    client: Client,
    base_url: String,
}

impl MlbService {
    pub fn new(settings: &UpstreamSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(settings.connect_timeout)
            .read_timeout(settings.read_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_player(&self, player_id: i64) -> Result<Player, UpstreamError> {
        let (url, body) = self.fetch(&format!("/people/{player_id}"), Vec::new()).await?;
        parse_player(&url, body)
    }

    /// `season` is forwarded only when given; the upstream picks its own
    /// default otherwise.
    pub async fn get_player_stats(
        &self,
        player_id: i64,
        season: Option<i32>,
        stats_type: &str,
        group: &str,
    ) -> Result<PlayerStats, UpstreamError> {
        let (url, body) = self
            .fetch(
                &format!("/people/{player_id}/stats"),
                stats_query(season, stats_type, group),
            )
            .await?;
        parse_player_stats(&url, body)
    }

    pub async fn get_teams(&self) -> Result<Vec<Team>, UpstreamError> {
        let (url, body) = self
            .fetch("/teams", vec![("sportId", MLB_SPORT_ID.to_string())])
            .await?;
        parse_teams(&url, body)
    }

    pub async fn get_team(&self, team_id: i64) -> Result<Team, UpstreamError> {
        let (url, body) = self.fetch(&format!("/teams/{team_id}"), Vec::new()).await?;
        parse_team(&url, body)
    }

    pub async fn get_team_roster(&self, team_id: i64) -> Result<Vec<RosterPlayer>, UpstreamError> {
        let (url, body) = self
            .fetch(
                &format!("/teams/{team_id}/roster"),
                vec![("rosterType", "active".to_string())],
            )
            .await?;
        parse_roster(&url, body)
    }

    pub async fn search_players(&self, query: &str) -> Result<SearchResponse, UpstreamError> {
        let (url, body) = self.fetch("/people/search", search_query(query)).await?;
        parse_search(&url, body)
    }

    /// One GET against `{base_url}{path}`. Returns the URL (for error
    /// messages) together with the decoded body.
    async fn fetch(&self, path: &str, query: Query) -> Result<(String, Value), UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?query, "calling upstream");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "upstream returned an error status");
            return Err(UpstreamError::Status { status, url });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| UpstreamError::Transport {
                url: url.clone(),
                source,
            })?;

        let body = serde_json::from_slice::<Value>(&bytes)
            .map_err(|e| UpstreamError::schema(&url, format!("body is not JSON: {e}")))?;

        Ok((url, body))
    }
}

/// `season=0` counts as unset and is not forwarded.
pub fn stats_query(season: Option<i32>, stats_type: &str, group: &str) -> Query {
    let mut query = vec![("stats", stats_type.to_string()), ("group", group.to_string())];
    if let Some(season) = season.filter(|s| *s != 0) {
        query.push(("season", season.to_string()));
    }
    query
}

pub fn search_query(names: &str) -> Query {
    vec![("names", names.to_string()), ("sportId", MLB_SPORT_ID.to_string())]
}

pub fn parse_player(url: &str, body: Value) -> Result<Player, UpstreamError> {
    first_entry(url, body, "people")
}

pub fn parse_player_stats(url: &str, body: Value) -> Result<PlayerStats, UpstreamError> {
    decode(url, body)
}

pub fn parse_teams(url: &str, body: Value) -> Result<Vec<Team>, UpstreamError> {
    let entries = envelope(url, body, "teams")?
        .ok_or_else(|| UpstreamError::schema(url, "missing `teams` envelope"))?;
    entries.into_iter().map(|entry| decode(url, entry)).collect()
}

/// Only the first element is kept; any others are dropped.
pub fn parse_team(url: &str, body: Value) -> Result<Team, UpstreamError> {
    first_entry(url, body, "teams")
}

/// A body without `roster` is an empty roster.
pub fn parse_roster(url: &str, body: Value) -> Result<Vec<RosterPlayer>, UpstreamError> {
    envelope(url, body, "roster")?
        .unwrap_or_default()
        .into_iter()
        .map(|entry| decode(url, entry))
        .collect()
}

pub fn parse_search(url: &str, body: Value) -> Result<SearchResponse, UpstreamError> {
    decode(url, body)
}

fn decode<T: DeserializeOwned>(url: &str, value: Value) -> Result<T, UpstreamError> {
    serde_json::from_value(value).map_err(|e| UpstreamError::schema(url, e.to_string()))
}

fn first_entry<T: DeserializeOwned>(url: &str, body: Value, key: &str) -> Result<T, UpstreamError> {
    let entry = envelope(url, body, key)?
        .ok_or_else(|| UpstreamError::schema(url, format!("missing `{key}` envelope")))?
        .into_iter()
        .next()
        .ok_or_else(|| UpstreamError::schema(url, format!("`{key}` envelope is empty")))?;
    decode(url, entry)
}

/// Pull the named array out of an object body. `Ok(None)` when the key is
/// absent or null.
fn envelope(url: &str, body: Value, key: &str) -> Result<Option<Vec<Value>>, UpstreamError> {
    let Value::Object(mut fields) = body else {
        return Err(UpstreamError::schema(url, "expected a JSON object"));
    };

    match fields.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(entries)) => Ok(Some(entries)),
        Some(_) => Err(UpstreamError::schema(url, format!("`{key}` is not an array"))),
    }
}
