pub fn lookup(
    data: &crate::playbyplay::PlayByPlayResponse,
) -> std::collections::HashMap<i64, crate::playbyplay::RosterSpot> {
    data.roster_spots
        .iter()
        .map(|spot| (spot.player_id, spot.clone()))
        .collect()
}

/// Attaches shooter display data to every shot whose shooter id resolves in
/// the roster. Shots without a shooter id or without a roster entry are passed
/// through untouched, a missing entry is never an error.
pub fn enrich_shots(
    shots: Vec<common::NormalizedShot>,
    roster: &std::collections::HashMap<i64, crate::playbyplay::RosterSpot>,
) -> Vec<common::NormalizedShot> {
    shots
        .into_iter()
        .map(|shot| {
            let player_id = match shot.shooting_player_id {
                Some(id) => id,
                None => return shot,
            };

            let player = match roster.get(&player_id) {
                Some(p) => p,
                None => {
                    tracing::warn!("Could not find roster entry for player: {:?}", player_id);
                    return shot;
                }
            };

            common::NormalizedShot {
                shooter_name: Some(format!(
                    "{} {}",
                    player.first_name.default, player.last_name.default
                )),
                shooter_headshot: Some(player.headshot.clone()),
                ..shot
            }
        })
        .collect()
}
