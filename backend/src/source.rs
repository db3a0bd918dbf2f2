use futures::FutureExt;

/// Seam over the upstream schedule/play-by-play API so the orchestration and
/// handlers can run against an in-memory source in tests.
pub trait GameSource: Send + Sync {
    fn play_by_play<'f, 'own>(
        &'own self,
        game_id: i64,
    ) -> futures::future::BoxFuture<
        'f,
        Result<analysis::playbyplay::PlayByPlayResponse, crate::nhl_api::FetchError>,
    >
    where
        'own: 'f;

    fn schedule_by_date<'f, 'own>(
        &'own self,
        date: String,
    ) -> futures::future::BoxFuture<'f, Result<crate::nhl_api::ScheduleResponse, crate::nhl_api::FetchError>>
    where
        'own: 'f;
}

impl GameSource for crate::nhl_api::Client {
    fn play_by_play<'f, 'own>(
        &'own self,
        game_id: i64,
    ) -> futures::future::BoxFuture<
        'f,
        Result<analysis::playbyplay::PlayByPlayResponse, crate::nhl_api::FetchError>,
    >
    where
        'own: 'f,
    {
        async move { crate::nhl_api::Client::play_by_play(self, game_id).await }.boxed()
    }

    fn schedule_by_date<'f, 'own>(
        &'own self,
        date: String,
    ) -> futures::future::BoxFuture<'f, Result<crate::nhl_api::ScheduleResponse, crate::nhl_api::FetchError>>
    where
        'own: 'f,
    {
        async move { crate::nhl_api::Client::schedule_by_date(self, &date).await }.boxed()
    }
}
