/// On-disk cache of rendered day images.
///
/// Files are named "{MM}月{DD}日.png"; presence of the file is the sole
/// hit signal. There is no TTL, so entries are served until deleted.
use std::path::{Path, PathBuf};

use crate::utils::date::DateQuery;

pub struct ImageCache {
    dir: PathBuf,
}

impl ImageCache {
    /// Open the cache, creating the directory if needed
    pub fn new(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Path of the cache entry for a date
    pub fn path_for(&self, date: &DateQuery) -> PathBuf {
        self.dir.join(date.image_file_name())
    }

    /// Return the cached image bytes, or None on a miss
    pub fn lookup(&self, date: &DateQuery) -> Option<Vec<u8>> {
        std::fs::read(self.path_for(date)).ok()
    }

    /// Write a freshly rendered image for a date
    pub fn store(&self, date: &DateQuery, bytes: &[u8]) -> std::io::Result<()> {
        std::fs::write(self.path_for(date), bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_cache(tag: &str) -> ImageCache {
        let dir = std::env::temp_dir().join(format!(
            "historybot-cache-test-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        ImageCache::new(&dir).expect("cache dir")
    }

    fn query(month: u32, day: u32) -> DateQuery {
        DateQuery::new(month, day).unwrap()
    }

    #[test]
    fn test_entry_file_name_pattern() {
        let cache = temp_cache("name");
        let path = cache.path_for(&query(3, 5));

        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "03月05日.png");
    }

    #[test]
    fn test_store_then_lookup() {
        let cache = temp_cache("roundtrip");
        let date = query(7, 1);

        assert_eq!(cache.lookup(&date), None);
        cache.store(&date, b"image bytes").unwrap();
        assert_eq!(cache.lookup(&date).as_deref(), Some(&b"image bytes"[..]));
    }

    #[test]
    fn test_dates_do_not_collide() {
        let cache = temp_cache("collide");

        cache.store(&query(1, 2), b"a").unwrap();
        cache.store(&query(12, 31), b"b").unwrap();

        assert_eq!(cache.lookup(&query(1, 2)).as_deref(), Some(&b"a"[..]));
        assert_eq!(cache.lookup(&query(12, 31)).as_deref(), Some(&b"b"[..]));
    }
}
