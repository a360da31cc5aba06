//! UI projection - maps selection state and an instant to region values
//!
//! Pure functions: same selection, same instant, identical output. The
//! scheduler decides *when* to call these; this module only decides *what*
//! the regions should say.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::cities::City;
use crate::i18n::{translation, Language};
use crate::scheduler::Region;
use crate::time_engine::{compute_snapshot_at, format_gmt_offset, is_daytime, utc_offset_minutes};

/// Everything a city marker displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityView {
    /// Display name in the current language
    pub label: String,
    /// Country name in the current language
    pub country: String,
    /// Day/night status glyph
    pub glyph: String,
    /// Accessible label, e.g. "Seoul, South Korea. Daytime."
    pub aria_label: String,
    /// Hover tooltip, e.g. "Seoul · Day"
    pub tooltip: String,
    pub is_day: bool,
    pub is_active: bool,
}

/// Chrome text for the current language, one entry per static region
pub fn chrome_text(language: Language) -> [(Region, &'static str); 4] {
    let t = translation(language);
    [
        (Region::Subtitle, t.subtitle),
        (Region::MapHeading, t.map_heading),
        (Region::MapInstruction, t.map_instruction),
        (Region::LanguageToggle, t.toggle_text),
    ]
}

/// "City, Country" line for the active city
pub fn active_city_text(city: &City, language: Language) -> String {
    format!(
        "{}, {}",
        city.names.get(language),
        city.country.get(language)
    )
}

/// Day/night view of one city at an instant
pub fn city_view(city: &City, language: Language, is_active: bool, at: DateTime<Utc>) -> CityView {
    let t = translation(language);
    let hour = compute_snapshot_at(city.time_zone, at).hour24;
    let is_day = is_daytime(hour);
    let label = city.names.get(language).to_string();
    let country = city.country.get(language).to_string();
    let status = if is_day { t.day_status } else { t.night_status };
    let word = if is_day { t.day_word } else { t.night_word };
    CityView {
        aria_label: format!("{}, {}. {}.", label, country, status),
        tooltip: format!("{} · {}", label, word),
        glyph: if is_day { "☀" } else { "🌙" }.to_string(),
        label,
        country,
        is_day,
        is_active,
    }
}

/// Zone label for the active city, e.g. "Asia/Seoul (GMT+09:00)".
///
/// The offset inside is read per instant so the label is correct across DST
/// transitions.
pub fn timezone_label(zone: Tz, at: DateTime<Utc>) -> String {
    let name = zone.name().replace('_', " ");
    format!("{} ({})", name, format_gmt_offset(utc_offset_minutes(zone, at)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::CityRegistry;
    use chrono::TimeZone;

    fn registry() -> CityRegistry {
        CityRegistry::with_default_cities().unwrap()
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, h, m, 0).unwrap()
    }

    #[test]
    fn test_active_city_text() {
        let registry = registry();
        let seoul = registry.get("seoul").unwrap();
        assert_eq!(active_city_text(seoul, Language::En), "Seoul, South Korea");
        assert_eq!(active_city_text(seoul, Language::Ko), "서울, 대한민국");
    }

    #[test]
    fn test_city_view_day_and_night() {
        let registry = registry();
        let seoul = registry.get("seoul").unwrap();
        // 03:00 UTC = noon in Seoul
        let noon = city_view(seoul, Language::En, true, at(3, 0));
        assert!(noon.is_day);
        assert_eq!(noon.glyph, "☀");
        assert_eq!(noon.aria_label, "Seoul, South Korea. Daytime.");
        assert_eq!(noon.tooltip, "Seoul · Day");
        // 15:00 UTC = midnight in Seoul
        let midnight = city_view(seoul, Language::Ko, false, at(15, 0));
        assert!(!midnight.is_day);
        assert_eq!(midnight.glyph, "🌙");
        assert_eq!(midnight.aria_label, "서울, 대한민국. 밤 시간대.");
        assert!(!midnight.is_active);
    }

    #[test]
    fn test_city_view_is_idempotent() {
        let registry = registry();
        let tokyo = registry.get("tokyo").unwrap();
        let first = city_view(tokyo, Language::En, false, at(3, 0));
        let second = city_view(tokyo, Language::En, false, at(3, 0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_timezone_label() {
        let registry = registry();
        let seoul = registry.get("seoul").unwrap();
        assert_eq!(
            timezone_label(seoul.time_zone, at(3, 0)),
            "Asia/Seoul (GMT+09:00)"
        );
        let new_york = registry.get("new-york").unwrap();
        assert_eq!(
            timezone_label(new_york.time_zone, at(3, 0)),
            "America/New York (GMT-05:00)"
        );
    }

    #[test]
    fn test_chrome_text_switches_language() {
        let ko: Vec<&str> = chrome_text(Language::Ko).iter().map(|(_, s)| *s).collect();
        let en: Vec<&str> = chrome_text(Language::En).iter().map(|(_, s)| *s).collect();
        assert!(ko.contains(&"주요 도시"));
        assert!(en.contains(&"Key Cities"));
        assert_ne!(ko, en);
    }
}
