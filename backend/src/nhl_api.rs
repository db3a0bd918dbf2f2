use serde::Deserialize;

pub static DEFAULT_API_BASE: &str = "https://api-web.nhle.com/v1";

pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug)]
pub enum FetchError {
    Request(reqwest::Error),
    Status(reqwest::StatusCode),
    Decode(reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::Request(value)
    }
}

impl Client {
    pub fn new<IS>(base_url: IS) -> Self
    where
        IS: Into<String>,
    {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get<T>(&self, path: &str) -> Result<T, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            tracing::error!("NHL API error: {} for {:?}", response.status(), url);
            return Err(FetchError::Status(response.status()));
        }

        response.json::<T>().await.map_err(FetchError::Decode)
    }

    pub async fn play_by_play(
        &self,
        game_id: i64,
    ) -> Result<analysis::playbyplay::PlayByPlayResponse, FetchError> {
        self.get(&format!("/gamecenter/{}/play-by-play", game_id))
            .await
    }

    pub async fn schedule_by_date(&self, date: &str) -> Result<ScheduleResponse, FetchError> {
        self.get(&format!("/schedule/{}", date)).await
    }

    pub async fn schedule_now(&self) -> Result<ScheduleResponse, FetchError> {
        self.get("/schedule/now").await
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    #[serde(default)]
    pub game_week: Vec<GameDay>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDay {
    pub date: String,
    #[serde(default)]
    pub games: Vec<ScheduledGame>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledGame {
    pub id: i64,
    pub start_time_utc: Option<String>,
}
