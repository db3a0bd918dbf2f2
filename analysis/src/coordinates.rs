pub const RINK_LENGTH: f64 = 200.0;
pub const RINK_WIDTH: f64 = 85.0;

/// Maps a raw rink coordinate into the attacking-direction frame for the
/// period. The flip is driven entirely by the period's defending-side flag:
/// "left" negates both axes for home and away attribution alike, any other
/// value (including a missing flag) falls through unchanged.
pub fn normalize_shot_coordinates(
    x: f64,
    y: f64,
    home_team_defending_side: &str,
    is_home_team: bool,
) -> (f64, f64) {
    if (is_home_team && home_team_defending_side == "left")
        || (!is_home_team && home_team_defending_side == "left")
    {
        return (-x, -y);
    }

    (x, y)
}

pub fn filter_shots_by_team(
    shots: &[common::NormalizedShot],
    team_abbrev: &str,
) -> Vec<common::NormalizedShot> {
    shots
        .iter()
        .filter(|shot| shot.team_abbrev == team_abbrev)
        .cloned()
        .collect()
}

pub fn filter_shots_by_type(
    shots: &[common::NormalizedShot],
    shot_type: &str,
) -> Vec<common::NormalizedShot> {
    shots
        .iter()
        .filter(|shot| shot.shot_type == shot_type)
        .cloned()
        .collect()
}
