/// Request pipeline for the history command.
///
/// All per-request state (the resolved date) is threaded through as
/// parameters; nothing is shared across invocations except the on-disk
/// image cache.
use tracing::{info, warn};

use crate::history::DayEvents;
use crate::models::Error;
use crate::render::cache::ImageCache;
use crate::render::image::RenderImage;
use crate::render::text::day_lines;
use crate::utils::date::DateQuery;

/// Produce the PNG reply for one resolved date.
///
/// A cache hit short-circuits before the source is consulted; a miss
/// fetches the day's events, renders them and stores the result. A
/// failed cache write is logged but does not fail the reply.
pub async fn day_reply<S: DayEvents>(
    source: &S,
    renderer: &impl RenderImage,
    cache: &ImageCache,
    date: &DateQuery,
) -> Result<Vec<u8>, Error> {
    if let Some(bytes) = cache.lookup(date) {
        info!("Cache hit for {}", date.display());
        return Ok(bytes);
    }

    let events = source.day_events(date).await?;
    let lines = day_lines(date, &events);
    let png = renderer.render_lines(&lines)?;

    if let Err(e) = cache.store(date, &png) {
        warn!("Failed to cache rendered image for {}: {}", date.display(), e);
    }

    Ok(png)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::history::FetchError;
    use crate::models::EventRecord;
    use crate::render::image::RenderError;

    /// Source that counts how often it is consulted
    struct ScriptedSource {
        events: Vec<EventRecord>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(events: Vec<EventRecord>) -> Self {
            Self {
                events,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl DayEvents for ScriptedSource {
        async fn day_events(&self, _date: &DateQuery) -> Result<Vec<EventRecord>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.events.clone())
        }
    }

    /// Source that simulates a network failure
    struct FailingSource;

    impl DayEvents for FailingSource {
        async fn day_events(&self, _date: &DateQuery) -> Result<Vec<EventRecord>, FetchError> {
            Err(FetchError::Upstream("connection reset".to_string()))
        }
    }

    /// Renderer stub that joins the lines into the "image" bytes
    struct StubRenderer;

    impl RenderImage for StubRenderer {
        fn render_lines(&self, lines: &[String]) -> Result<Vec<u8>, RenderError> {
            Ok(lines.join("\n").into_bytes())
        }
    }

    fn temp_cache(tag: &str) -> ImageCache {
        let dir = std::env::temp_dir().join(format!(
            "historybot-service-test-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        ImageCache::new(&dir).expect("cache dir")
    }

    fn record(year: &str, title: &str) -> EventRecord {
        EventRecord {
            year: year.to_string(),
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn test_miss_fetches_renders_and_stores() {
        let source = ScriptedSource::new(vec![record("1990", "Event A")]);
        let cache = temp_cache("miss");
        let date = DateQuery::new(3, 5).unwrap();

        let reply = day_reply(&source, &StubRenderer, &cache, &date)
            .await
            .unwrap();

        let text = String::from_utf8(reply).unwrap();
        assert!(text.contains("3月5日"));
        assert!(text.contains("1990 Event A"));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(cache.lookup(&date).is_some());
    }

    #[tokio::test]
    async fn test_cache_hit_skips_the_source() {
        let source = ScriptedSource::new(vec![record("1990", "Event A")]);
        let cache = temp_cache("hit");
        let date = DateQuery::new(3, 5).unwrap();
        cache.store(&date, b"previously rendered").unwrap();

        let reply = day_reply(&source, &StubRenderer, &cache, &date)
            .await
            .unwrap();

        assert_eq!(reply, b"previously rendered");
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_second_request_is_served_from_cache() {
        let source = ScriptedSource::new(vec![record("1990", "Event A")]);
        let cache = temp_cache("repeat");
        let date = DateQuery::new(3, 5).unwrap();

        let first = day_reply(&source, &StubRenderer, &cache, &date)
            .await
            .unwrap();
        let second = day_reply(&source, &StubRenderer, &cache, &date)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_surfaces_as_a_single_error() {
        let cache = temp_cache("failure");
        let date = DateQuery::new(3, 5).unwrap();

        let result = day_reply(&FailingSource, &StubRenderer, &cache, &date).await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("connection reset"));
        // Nothing was cached for the failed request
        assert_eq!(cache.lookup(&date), None);
    }
}
