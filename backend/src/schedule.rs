/// Loads every started game for the given date and transforms each one
/// independently. A game that fails to load is logged and omitted, it never
/// takes its siblings down with it. A schedule that fails to load yields an
/// empty listing for the date.
#[tracing::instrument(skip(source))]
pub async fn load_day_games(
    source: &dyn crate::GameSource,
    date: &str,
    now: chrono::DateTime<chrono::Utc>,
) -> common::DayGames {
    let schedule = match source.schedule_by_date(date.to_string()).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Loading schedule for {:?}: {:?}", date, e);
            return common::DayGames {
                date: date.to_string(),
                games: Vec::new(),
            };
        }
    };

    let games = schedule
        .game_week
        .into_iter()
        .find(|day| day.date == date)
        .map(|day| day.games)
        .unwrap_or_default();

    tracing::info!("Found {} scheduled games for {:?}", games.len(), date);

    let loads = games
        .into_iter()
        .filter(|game| has_started(game, now))
        .map(|game| async move {
            match source.play_by_play(game.id).await {
                Ok(data) => Some(common::GameEntry {
                    game_id: game.id.to_string(),
                    heatmap: analysis::shots::transform(&data),
                }),
                Err(e) => {
                    tracing::error!("Loading game {:?}: {:?}", game.id, e);
                    None
                }
            }
        });

    let entries: Vec<_> = futures_util::future::join_all(loads)
        .await
        .into_iter()
        .flatten()
        .collect();

    common::DayGames {
        date: date.to_string(),
        games: entries,
    }
}

fn has_started(game: &crate::nhl_api::ScheduledGame, now: chrono::DateTime<chrono::Utc>) -> bool {
    let raw = match game.start_time_utc.as_deref() {
        Some(r) => r,
        None => return true,
    };

    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(start) => start <= now,
        // an unparseable start time never hides a game
        Err(_) => true,
    }
}
