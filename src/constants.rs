/// ALAPI "today in history" endpoint (commercial API source)
pub const ALAPI_TODAY_URL: &str = "https://v1.alapi.cn/api/today";

/// Baike month-listing endpoint; a two-digit month plus ".json" is appended
pub const BAIKE_EVENTS_URL: &str = "https://baike.baidu.com/cms/home/eventsOnHistory";

/// Default path of the TrueType font used by the image renderer
pub const DEFAULT_FONT_PATH: &str = "assets/font.ttf";

/// Default path of the background template image
pub const DEFAULT_BACKGROUND_PATH: &str = "assets/background.png";

/// Default directory for rendered-image cache files
pub const DEFAULT_CACHE_DIR: &str = "cache";

/// Font size in pixels for rendered event lines
pub const FONT_SIZE: f32 = 24.0;

/// Vertical step between rendered lines (fixed, not measured per line)
pub const LINE_STEP: u32 = 32;

/// Left/right margin around the rendered text block
pub const SIDE_MARGIN: u32 = 20;

/// Top/bottom margin around the rendered text block
pub const TOP_MARGIN: u32 = 16;

/// Upper bound (inclusive) for each random RGB channel; keeps text dark
pub const MAX_COLOR_CHANNEL: u8 = 100;

/// Line substituted when a day has no event records
pub const NO_EVENTS_LINE: &str = "无历史事件记录";

/// Reply when the commercial API returns an empty listing for today
pub const NO_EVENTS_TODAY_MESSAGE: &str = "今天没有历史上的大事记录。";

/// Generic apology surfaced for unexpected failures in the request path
pub const GENERIC_APOLOGY: &str = "抱歉，查询历史上的今天时出错了，请稍后再试！";

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "historybot_rs=info";
