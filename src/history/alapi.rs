/// Client for the commercial ALAPI "today in history" endpoint
use serde::Deserialize;

use crate::constants::ALAPI_TODAY_URL;
use crate::history::FetchError;

/// One record from the commercial API
#[derive(Debug, Clone, Deserialize)]
pub struct AlapiEvent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub year: String,
}

/// Envelope around the API payload
#[derive(Debug, Deserialize)]
struct AlapiResponse {
    code: i64,
    #[serde(default)]
    msg: String,
    #[serde(default)]
    data: Vec<AlapiEvent>,
}

#[derive(Clone)]
pub struct AlapiClient {
    http: reqwest::Client,
    token: String,
}

impl AlapiClient {
    pub fn new(token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
        }
    }

    /// Fetch the event listing for the current date.
    /// The upstream endpoint serves today only; there is no date parameter.
    pub async fn today_events(&self) -> Result<Vec<AlapiEvent>, FetchError> {
        let response = self
            .http
            .get(ALAPI_TODAY_URL)
            .query(&[("token", self.token.as_str())])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(FetchError::Transport)?;

        let payload: AlapiResponse = response.json().await.map_err(FetchError::Transport)?;

        if payload.code != 200 {
            let msg = if payload.msg.is_empty() {
                "未知错误".to_string()
            } else {
                payload.msg
            };
            return Err(FetchError::Upstream(msg));
        }

        Ok(payload.data)
    }
}
