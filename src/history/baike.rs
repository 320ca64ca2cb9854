/// Client for the Baike month-listing endpoint (scraping source)
use tracing::warn;

use crate::constants::BAIKE_EVENTS_URL;
use crate::history::sanitize::repair_payload;
use crate::models::{EventRecord, HistoryIndex};
use crate::utils::date::DateQuery;

#[derive(Clone, Default)]
pub struct BaikeClient {
    http: reqwest::Client,
}

impl BaikeClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Fetch and parse the full month index for a two-digit month key.
    ///
    /// One GET, no retry. Transport failures and unparseable payloads
    /// are logged and degrade to an empty index.
    pub async fn month_index(&self, month_key: &str) -> HistoryIndex {
        let url = format!("{}/{}.json", BAIKE_EVENTS_URL, month_key);

        let raw = match self.fetch_raw(&url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("History fetch failed for month {}: {}", month_key, e);
                return HistoryIndex::new();
            }
        };

        let repaired = repair_payload(&raw);
        match serde_json::from_str(&repaired) {
            Ok(index) => index,
            Err(e) => {
                warn!(
                    "Repaired history payload for month {} did not parse: {}",
                    month_key, e
                );
                HistoryIndex::new()
            }
        }
    }

    /// Events for one day, in upstream order; empty when the day is
    /// absent or the month fetch degraded.
    pub async fn day_events(&self, date: &DateQuery) -> Vec<EventRecord> {
        let index = self.month_index(&date.month_key()).await;

        index
            .get(&date.month_key())
            .and_then(|month| month.get(&date.day_key()))
            .cloned()
            .unwrap_or_default()
    }

    async fn fetch_raw(&self, url: &str) -> Result<String, reqwest::Error> {
        self.http
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())?
            .text()
            .await
    }
}
