use std::collections::HashMap;

use serde::Deserialize;

use crate::history::EventSource;
use crate::history::alapi::AlapiClient;
use crate::render::cache::ImageCache;
use crate::render::image::ImageRenderer;

/// One historical event as parsed from the repaired month payload.
/// Unknown payload fields (link, type, cover, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub title: String,
}

/// Month payload index: month key ("03") -> day key ("0305") -> events
/// in upstream order. Rebuilt fully on every fetch, never merged.
pub type HistoryIndex = HashMap<String, HashMap<String, Vec<EventRecord>>>;

/// Bot state shared across all command invocations
pub struct Data {
    /// Data source serving the history command, selected at startup
    pub source: EventSource,
    /// Commercial API client serving the today command
    pub alapi: AlapiClient,
    /// Text-to-image renderer (font and background loaded at startup)
    pub renderer: ImageRenderer,
    /// On-disk cache of rendered day images
    pub cache: ImageCache,
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
