// Mapping of the gamecenter play-by-play response from api-web.nhle.com.
// Only the fields consumed by the transform are modeled, serde ignores the rest.

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayByPlayResponse {
    pub id: i64,
    pub game_date: String,
    pub home_team: GameTeam,
    pub away_team: GameTeam,
    pub plays: Vec<Play>,
    #[serde(default)]
    pub roster_spots: Vec<RosterSpot>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameTeam {
    pub id: i64,
    pub common_name: LocalizedString,
    pub place_name: LocalizedString,
    pub abbrev: String,
}

// every display string in the payload is wrapped in a localization object
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct LocalizedString {
    pub default: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    pub period_descriptor: PeriodDescriptor,
    pub time_in_period: String,
    // missing on some early-game events, treated the same as "right"
    #[serde(default)]
    pub home_team_defending_side: String,
    pub type_desc_key: String,
    pub details: Option<PlayDetails>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDescriptor {
    pub number: u32,
    pub period_type: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayDetails {
    #[serde(default)]
    pub event_owner_team_id: i64,
    pub shooting_player_id: Option<i64>,
    pub goalie_in_net_id: Option<i64>,
    pub shot_type: Option<String>,
    pub x_coord: Option<f64>,
    pub y_coord: Option<f64>,
    pub scoring_chance: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSpot {
    pub player_id: i64,
    pub first_name: LocalizedString,
    pub last_name: LocalizedString,
    pub headshot: String,
}
