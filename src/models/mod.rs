use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Loosely-typed upstream object (league, division, position, ...).
/// Key order from the upstream payload is kept on re-serialization.
pub type Blob = Map<String, Value>;

/// Person record from the `people` envelope
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub primary_number: Option<String>,
    pub birth_date: Option<String>,
    pub current_age: Option<i64>,
    pub birth_city: Option<String>,
    pub birth_country: Option<String>,
    pub height: Option<String>,
    pub weight: Option<i64>,
    pub active: bool,
    pub primary_position: Option<Blob>,
    pub use_name: Option<String>,
    pub middle_name: Option<String>,
    pub boxscore_name: Option<String>,
    pub gender: Option<String>,
    /// True for player entities, as opposed to coaches, umpires, etc.
    pub is_player: bool,
    pub is_verified: bool,
    pub draft_year: Option<i64>,
    pub mlb_debut_date: Option<String>,
    pub bat_side: Option<Blob>,
    pub pitch_hand: Option<Blob>,
    pub name_first_last: Option<String>,
    pub name_slug: Option<String>,
    pub first_last_name: Option<String>,
    pub last_first_name: Option<String>,
    pub last_init_name: Option<String>,
    pub init_last_name: Option<String>,
    #[serde(rename = "fullFMLName")]
    pub full_fml_name: Option<String>,
    #[serde(rename = "fullLFMName")]
    pub full_lfm_name: Option<String>,
    pub strike_zone_top: Option<f64>,
    pub strike_zone_bottom: Option<f64>,
}

/// Stat splits for one player, one stat type and one group
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerStats {
    #[serde(rename = "type")]
    pub stat_type: Blob,
    pub group: Blob,
    pub stats: Vec<Blob>,
    pub season: Option<String>,
}

/// Club record from the `teams` envelope
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub team_code: String,
    pub file_code: Option<String>,
    pub abbreviation: String,
    pub team_name: String,
    pub location_name: String,
    pub first_year_of_play: Option<String>,
    pub league: Option<Blob>,
    pub division: Option<Blob>,
    pub sport: Option<Blob>,
    pub short_name: Option<String>,
    pub franchise_name: Option<String>,
    pub club_name: Option<String>,
    pub all_star_status: Option<String>,
    pub active: bool,
    pub spring_league: Option<Blob>,
    pub link: Option<String>,
    pub season: Option<i64>,
    pub venue: Option<Blob>,
    pub spring_venue: Option<Blob>,
}

/// Entry of a team's active roster
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayer {
    /// Holds at least `id`, `fullName` and `link`
    pub person: Blob,
    pub jersey_number: Option<String>,
    pub position: Blob,
    pub status: Option<Blob>,
    pub parent_team_id: Option<i64>,
}

/// Response wrapper for player search
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub people: Vec<Player>,
    #[serde(default)]
    pub total_size: i64,
}

// Demo item, unrelated to the stats domain
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Item {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
