use analysis::{playbyplay, roster};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn shot(shooting_player_id: Option<i64>) -> common::NormalizedShot {
    common::NormalizedShot {
        x: 50.0,
        y: 10.0,
        shot_type: "wrist".to_string(),
        type_desc_key: "shot-on-goal".to_string(),
        period: 2,
        period_type: "REG".to_string(),
        time_in_period: "12:01".to_string(),
        team_id: 10,
        team_abbrev: "AAA".to_string(),
        scoring_chance: false,
        is_goal: false,
        shooting_player_id,
        goalie_in_net_id: None,
        shooter_name: None,
        shooter_headshot: None,
    }
}

fn roster_spot(player_id: i64, first: &str, last: &str) -> playbyplay::RosterSpot {
    playbyplay::RosterSpot {
        player_id,
        first_name: playbyplay::LocalizedString {
            default: first.to_string(),
        },
        last_name: playbyplay::LocalizedString {
            default: last.to_string(),
        },
        headshot: format!("https://assets.nhle.com/mugs/nhl/{}.png", player_id),
    }
}

#[test]
fn resolved_shooter_gets_name_and_headshot() {
    let mut lookup = std::collections::HashMap::new();
    lookup.insert(8478402, roster_spot(8478402, "Connor", "McDavid"));

    let enriched = roster::enrich_shots(vec![shot(Some(8478402))], &lookup);

    assert_eq!(1, enriched.len());
    assert_eq!(Some("Connor McDavid".to_string()), enriched[0].shooter_name);
    assert_eq!(
        Some("https://assets.nhle.com/mugs/nhl/8478402.png".to_string()),
        enriched[0].shooter_headshot
    );
}

#[test]
#[traced_test]
fn unresolved_shooter_is_passed_through() {
    let mut lookup = std::collections::HashMap::new();
    lookup.insert(8478402, roster_spot(8478402, "Connor", "McDavid"));

    let input = vec![shot(Some(9999999))];
    let enriched = roster::enrich_shots(input.clone(), &lookup);

    assert_eq!(input, enriched);
}

#[test]
fn shot_without_shooter_is_passed_through() {
    let lookup = std::collections::HashMap::new();

    let input = vec![shot(None)];
    let enriched = roster::enrich_shots(input.clone(), &lookup);

    assert_eq!(input, enriched);
}

#[test]
fn empty_roster_is_a_no_op() {
    let lookup = std::collections::HashMap::new();

    let input = vec![shot(Some(8478402)), shot(None)];
    let enriched = roster::enrich_shots(input.clone(), &lookup);

    assert_eq!(input, enriched);
}

#[test]
fn enrichment_is_idempotent() {
    let mut lookup = std::collections::HashMap::new();
    lookup.insert(8478402, roster_spot(8478402, "Connor", "McDavid"));

    let once = roster::enrich_shots(vec![shot(Some(8478402))], &lookup);
    let twice = roster::enrich_shots(once.clone(), &lookup);

    assert_eq!(once, twice);
}

#[test]
fn lookup_is_keyed_by_player_id() {
    let data: playbyplay::PlayByPlayResponse = serde_json::from_value(serde_json::json!({
        "id": 2023020100_i64,
        "gameDate": "2023-11-02",
        "homeTeam": {
            "id": 10,
            "commonName": { "default": "Penguins" },
            "placeName": { "default": "Pittsburgh" },
            "abbrev": "AAA"
        },
        "awayTeam": {
            "id": 20,
            "commonName": { "default": "Flyers" },
            "placeName": { "default": "Philadelphia" },
            "abbrev": "BBB"
        },
        "plays": [],
        "rosterSpots": [
            {
                "playerId": 8478402_i64,
                "firstName": { "default": "Connor" },
                "lastName": { "default": "McDavid" },
                "headshot": "https://assets.nhle.com/mugs/nhl/8478402.png"
            }
        ]
    }))
    .unwrap();

    let lookup = roster::lookup(&data);

    assert_eq!(1, lookup.len());
    assert_eq!(
        "McDavid",
        lookup.get(&8478402).unwrap().last_name.default
    );
}
