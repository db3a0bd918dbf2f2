// Event kinds that can never be plotted, everything else (including kinds
// added upstream later) is treated as a shot attempt.
pub static NON_SHOT_EVENTS: phf::Set<&'static str> = phf::phf_set! {
    "hit",
    "takeaway",
    "giveaway",
    "penalty",
    "faceoff",
};

pub static GOAL_EVENT: &str = "goal";

pub fn transform(data: &crate::playbyplay::PlayByPlayResponse) -> common::HeatMapData {
    let shots = extract_shots(&data.plays, &data.home_team, &data.away_team);

    let game_info = common::GameInfo {
        game_id: data.id.to_string(),
        home_team: format!(
            "{} {}",
            data.home_team.place_name.default, data.home_team.common_name.default
        ),
        away_team: format!(
            "{} {}",
            data.away_team.place_name.default, data.away_team.common_name.default
        ),
        home_team_abbrev: data.home_team.abbrev.clone(),
        away_team_abbrev: data.away_team.abbrev.clone(),
        game_date: data.game_date.clone(),
    };

    common::HeatMapData { shots, game_info }
}

pub fn extract_shots(
    plays: &[crate::playbyplay::Play],
    home_team: &crate::playbyplay::GameTeam,
    away_team: &crate::playbyplay::GameTeam,
) -> Vec<common::NormalizedShot> {
    let mut shots = Vec::new();

    for play in plays.iter() {
        if NON_SHOT_EVENTS.contains(play.type_desc_key.as_str()) {
            continue;
        }

        let details = match play.details.as_ref() {
            Some(d) => d,
            None => continue,
        };

        // either coordinate missing disqualifies the event
        let (x, y) = match (details.x_coord, details.y_coord) {
            (Some(x), Some(y)) => (x, y),
            _ => continue,
        };

        let is_home_team = details.event_owner_team_id == home_team.id;

        let (x, y) = crate::coordinates::normalize_shot_coordinates(
            x,
            y,
            &play.home_team_defending_side,
            is_home_team,
        );

        let team_abbrev = if is_home_team {
            home_team.abbrev.clone()
        } else {
            away_team.abbrev.clone()
        };

        shots.push(common::NormalizedShot {
            x,
            y,
            shot_type: details
                .shot_type
                .clone()
                .unwrap_or_else(|| String::from("unknown")),
            type_desc_key: play.type_desc_key.clone(),
            period: play.period_descriptor.number,
            period_type: play.period_descriptor.period_type.clone(),
            time_in_period: play.time_in_period.clone(),
            team_id: details.event_owner_team_id,
            team_abbrev,
            scoring_chance: details.scoring_chance.unwrap_or(false),
            is_goal: play.type_desc_key == GOAL_EVENT,
            shooting_player_id: details.shooting_player_id,
            goalie_in_net_id: details.goalie_in_net_id,
            shooter_name: None,
            shooter_headshot: None,
        });
    }

    tracing::debug!("Extracted {} shots from {} plays", shots.len(), plays.len());

    shots
}
