/// History data sources and the strategy seam between them
pub mod alapi;
pub mod baike;
pub mod sanitize;

use chrono::Local;
use tracing::warn;

use crate::models::EventRecord;
use crate::utils::date::DateQuery;

use alapi::AlapiClient;
use baike::BaikeClient;

/// Errors from the data-source layer
#[derive(Debug)]
pub enum FetchError {
    /// The API answered with an error payload
    Upstream(String),
    /// The source only serves the current date
    DateNotSupported,
    /// Network or decoding failure in the HTTP client
    Transport(reqwest::Error),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Upstream(msg) => write!(f, "upstream error: {}", msg),
            FetchError::DateNotSupported => {
                write!(f, "this source only serves the current date")
            }
            FetchError::Transport(e) => write!(f, "transport error: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

/// Seam between the request pipeline and a concrete data source.
/// Implemented by [`EventSource`] and by mocks in tests.
pub trait DayEvents {
    fn day_events(
        &self,
        date: &DateQuery,
    ) -> impl Future<Output = Result<Vec<EventRecord>, FetchError>> + Send;
}

/// Data source for the history command, selected at composition time
pub enum EventSource {
    /// Commercial API; serves the current date only
    Alapi(AlapiClient),
    /// Encyclopedia scraping endpoint with payload repair
    Baike(BaikeClient),
}

impl DayEvents for EventSource {
    async fn day_events(&self, date: &DateQuery) -> Result<Vec<EventRecord>, FetchError> {
        match self {
            EventSource::Alapi(client) => {
                let today = DateQuery::from_calendar_date(Local::now().date_naive());
                if *date != today {
                    warn!(
                        "ALAPI source cannot serve {}; it only has the current date",
                        date.display()
                    );
                    return Err(FetchError::DateNotSupported);
                }

                let events = client.today_events().await?;
                Ok(events
                    .into_iter()
                    .map(|event| EventRecord {
                        year: event.year,
                        title: event.title,
                    })
                    .collect())
            }
            EventSource::Baike(client) => Ok(client.day_events(date).await),
        }
    }
}
