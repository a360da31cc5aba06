//! Formatter cache - memoized locale/zone formatters
//!
//! One formatter per (kind, language, zone) key, built on first use and
//! reused on every subsequent tick. The map never evicts: the key space is
//! bounded by 2 languages x 10 zones x 3 kinds = 60 entries, so an unbounded
//! map is intentional, not an oversight. A formatter caches its binding, not
//! its output - the zone-name formatter re-reads the UTC offset on every
//! call so DST transitions show up immediately.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

use crate::i18n::{month_name, weekday_name, Language};
use crate::projection::timezone_label;
use crate::time_engine::compute_snapshot_at;

/// What a cached formatter renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatterKind {
    /// "hh:mm:ss" in 12-hour form (language-independent)
    Time,
    /// Long localized date, e.g. "Thursday, January 15, 2026"
    Date,
    /// Zone display name with per-instant offset, e.g. "Asia/Seoul (GMT+09:00)"
    ZoneName,
}

/// A reusable formatter bound to one (kind, language, zone) combination
#[derive(Debug, Clone)]
pub struct ClockFormatter {
    kind: FormatterKind,
    language: Language,
    zone: Tz,
}

impl ClockFormatter {
    fn new(kind: FormatterKind, language: Language, zone: Tz) -> ClockFormatter {
        ClockFormatter {
            kind,
            language,
            zone,
        }
    }

    /// Render the bound field set for an instant
    pub fn format(&self, now_utc: DateTime<Utc>) -> String {
        match self.kind {
            FormatterKind::Time => compute_snapshot_at(self.zone, now_utc).format_time(),
            FormatterKind::Date => {
                let local = now_utc.with_timezone(&self.zone);
                let weekday = weekday_name(self.language, local.weekday());
                let month = month_name(self.language, local.month());
                match self.language {
                    Language::En => {
                        format!("{}, {} {}, {}", weekday, month, local.day(), local.year())
                    }
                    Language::Ko => {
                        format!("{}년 {} {}일 {}", local.year(), month, local.day(), weekday)
                    }
                }
            }
            FormatterKind::ZoneName => timezone_label(self.zone, now_utc),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    kind: FormatterKind,
    language: Language,
    zone: Tz,
}

/// Memoized formatter store
#[derive(Debug, Default)]
pub struct FormatterCache {
    formatters: HashMap<CacheKey, ClockFormatter>,
}

impl FormatterCache {
    pub fn new() -> FormatterCache {
        FormatterCache::default()
    }

    /// Fetch the formatter for a key, constructing it on first use
    pub fn get(&mut self, kind: FormatterKind, language: Language, zone: Tz) -> &ClockFormatter {
        let key = CacheKey {
            kind,
            language,
            zone,
        };
        self.formatters
            .entry(key)
            .or_insert_with(|| ClockFormatter::new(kind, language, zone))
    }

    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn seoul() -> Tz {
        "Asia/Seoul".parse().unwrap()
    }

    fn jan_15_noon_seoul() -> DateTime<Utc> {
        // 03:00 UTC = 12:00 KST, a Thursday
        Utc.with_ymd_and_hms(2026, 1, 15, 3, 0, 0).unwrap()
    }

    #[test]
    fn test_cache_is_memoized() {
        let mut cache = FormatterCache::new();
        cache.get(FormatterKind::Time, Language::En, seoul());
        cache.get(FormatterKind::Time, Language::En, seoul());
        assert_eq!(cache.len(), 1);
        cache.get(FormatterKind::Date, Language::En, seoul());
        cache.get(FormatterKind::Date, Language::Ko, seoul());
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_time_format() {
        let mut cache = FormatterCache::new();
        let formatter = cache.get(FormatterKind::Time, Language::En, seoul());
        assert_eq!(formatter.format(jan_15_noon_seoul()), "12:00:00");
    }

    #[test]
    fn test_date_format_both_languages() {
        let mut cache = FormatterCache::new();
        let en = cache
            .get(FormatterKind::Date, Language::En, seoul())
            .clone();
        assert_eq!(en.format(jan_15_noon_seoul()), "Thursday, January 15, 2026");
        let ko = cache
            .get(FormatterKind::Date, Language::Ko, seoul())
            .clone();
        assert_eq!(ko.format(jan_15_noon_seoul()), "2026년 1월 15일 목요일");
    }

    #[test]
    fn test_zone_name_format_reflects_dst() {
        let mut cache = FormatterCache::new();
        let tz: Tz = "America/New_York".parse().unwrap();
        let formatter = cache.get(FormatterKind::ZoneName, Language::En, tz).clone();
        let winter = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2026, 7, 15, 12, 0, 0).unwrap();
        assert_eq!(formatter.format(winter), "America/New York (GMT-05:00)");
        assert_eq!(formatter.format(summer), "America/New York (GMT-04:00)");
    }
}
