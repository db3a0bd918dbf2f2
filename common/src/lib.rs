#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedShot {
    pub x: f64,
    pub y: f64,
    pub shot_type: String,
    pub type_desc_key: String,
    pub period: u32,
    pub period_type: String,
    pub time_in_period: String,
    pub team_id: i64,
    pub team_abbrev: String,
    pub scoring_chance: bool,
    pub is_goal: bool,
    pub shooting_player_id: Option<i64>,
    pub goalie_in_net_id: Option<i64>,
    pub shooter_name: Option<String>,
    pub shooter_headshot: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    pub game_id: String,
    pub home_team: String,
    pub away_team: String,
    pub home_team_abbrev: String,
    pub away_team_abbrev: String,
    pub game_date: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatMapData {
    pub shots: Vec<NormalizedShot>,
    pub game_info: GameInfo,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEntry {
    pub game_id: String,
    pub heatmap: HeatMapData,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayGames {
    pub date: String,
    pub games: Vec<GameEntry>,
}
