pub fn router(source: Box<dyn crate::GameSource>) -> axum::Router {
    axum::Router::new().nest("/games/", games::router(source))
}

pub mod games {
    use axum::extract::{Path, Query, State};
    use std::sync::Arc;

    struct GamesState {
        source: Box<dyn crate::GameSource>,
    }

    pub fn router(source: Box<dyn crate::GameSource>) -> axum::Router {
        axum::Router::new()
            .route("/", axum::routing::get(day))
            .route("/:id", axum::routing::get(game))
            .with_state(Arc::new(GamesState { source }))
    }

    #[derive(Debug, serde::Deserialize)]
    struct DayQuery {
        date: Option<String>,
    }

    #[tracing::instrument(skip(state))]
    async fn day(
        State(state): State<Arc<GamesState>>,
        Query(query): Query<DayQuery>,
    ) -> axum::response::Json<common::DayGames> {
        let now = chrono::Utc::now();
        let date = query
            .date
            .unwrap_or_else(|| now.date_naive().to_string());

        tracing::info!("Loading games for {:?}", date);

        let result = crate::schedule::load_day_games(state.source.as_ref(), &date, now).await;

        axum::response::Json(result)
    }

    #[tracing::instrument(skip(state))]
    async fn game(
        State(state): State<Arc<GamesState>>,
        Path(game_id): Path<i64>,
    ) -> Result<axum::response::Json<common::HeatMapData>, axum::http::StatusCode> {
        tracing::info!("Loading shot chart for game {:?}", game_id);

        let data = match state.source.play_by_play(game_id).await {
            Ok(d) => d,
            Err(e) => {
                tracing::error!("Loading play-by-play for game {:?}: {:?}", game_id, e);
                return Err(axum::http::StatusCode::BAD_GATEWAY);
            }
        };

        let mut heatmap = analysis::shots::transform(&data);

        let roster = analysis::roster::lookup(&data);
        heatmap.shots = analysis::roster::enrich_shots(heatmap.shots, &roster);

        Ok(axum::response::Json(heatmap))
    }
}
