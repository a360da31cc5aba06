//! Render scheduler - fixed-cadence tick driver with change detection
//!
//! One tick samples the clock once, projects it into the selected zone, and
//! updates only the regions whose granularity actually changed: the
//! sub-second readout every tick, the time/status group when the second
//! rolls over, the date and zone label when the minute does. Input events
//! never render inline; they mutate selection state and arm a forced full
//! repaint for the next tick.

use chrono::{DateTime, Utc};

use crate::cities::CityRegistry;
use crate::formatter::{FormatterCache, FormatterKind};
use crate::i18n::{translation, Language};
use crate::projection::{active_city_text, chrome_text, city_view, CityView};
use crate::time_engine::{compute_snapshot_at, overlay_rotation_deg};

/// Named output regions of the widget surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    ClockTime,
    ClockMillis,
    ClockAmPm,
    ClockDate,
    CityName,
    TimezoneLabel,
    Subtitle,
    MapHeading,
    MapInstruction,
    LanguageToggle,
}

/// Visual cue replayed on a region when its value changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    SecondChange,
    MinuteChange,
}

/// Abstract render surface.
///
/// Implementations own the actual presentation; a sink that has no use for a
/// region simply ignores the write (a missing region is never an error, the
/// widget favors partial rendering over crashing a live display).
pub trait RenderSink {
    fn set_text(&mut self, region: Region, value: &str);

    /// Auxiliary attribute on a region (e.g. the ISO instant on the clock)
    fn set_attr(&mut self, _region: Region, _name: &str, _value: &str) {}

    fn set_city(&mut self, city_id: &str, view: &CityView);

    fn set_overlay_rotation(&mut self, degrees: f64);

    fn replay_cue(&mut self, region: Region, cue: Cue);
}

/// Discrete user inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Select a city by id; unknown ids are ignored
    SelectCity(String),
    /// Flip the two-valued language state
    ToggleLanguage,
}

/// Current language and selected city
#[derive(Debug, Clone)]
pub struct SelectionState {
    pub city_id: String,
    pub language: Language,
}

/// Last values written to the visible clock, used to suppress redundant
/// updates. Cleared whenever selection or language changes.
#[derive(Debug, Clone, Default)]
struct RenderMemo {
    last_second: Option<u32>,
    last_minute: Option<u32>,
    timezone_dirty: bool,
}

impl RenderMemo {
    fn invalidate(&mut self) {
        self.last_second = None;
        self.last_minute = None;
        self.timezone_dirty = true;
    }
}

/// Default selection when the registry contains it
const DEFAULT_CITY: &str = "seoul";

/// The world clock core: registry, selection, memo, formatter cache.
///
/// Single-threaded by design: ticks and input events must come from the same
/// logical thread (in the widget both run inside the nannou update loop).
pub struct WorldClock {
    registry: CityRegistry,
    selection: SelectionState,
    memo: RenderMemo,
    formatters: FormatterCache,
    force_pending: bool,
}

impl WorldClock {
    pub fn new(registry: CityRegistry, language: Language) -> WorldClock {
        let city_id = if registry.contains(DEFAULT_CITY) {
            DEFAULT_CITY.to_string()
        } else {
            registry.first().id.clone()
        };
        WorldClock {
            registry,
            selection: SelectionState { city_id, language },
            memo: RenderMemo {
                timezone_dirty: true,
                ..RenderMemo::default()
            },
            formatters: FormatterCache::new(),
            // First tick paints the whole surface
            force_pending: true,
        }
    }

    pub fn registry(&self) -> &CityRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// True when an event armed a forced repaint that has not run yet
    pub fn force_pending(&self) -> bool {
        self.force_pending
    }

    /// Apply a user input. Returns false when the event was ignored
    /// (unknown city id); state is unchanged in that case.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::SelectCity(id) => self.select_city(&id),
            InputEvent::ToggleLanguage => {
                self.toggle_language();
                true
            }
        }
    }

    fn select_city(&mut self, id: &str) -> bool {
        if !self.registry.contains(id) {
            return false;
        }
        self.selection.city_id = id.to_string();
        self.arm_force();
        true
    }

    fn toggle_language(&mut self) {
        self.selection.language = self.selection.language.toggled();
        self.arm_force();
    }

    /// Invalidate the memo so the next tick cannot be suppressed
    fn arm_force(&mut self) {
        self.memo.invalidate();
        self.force_pending = true;
    }

    /// Run one tick against the real-time clock
    pub fn tick(&mut self, sink: &mut impl RenderSink) {
        self.tick_at(Utc::now(), sink);
    }

    /// Run one tick at an explicit instant
    pub fn tick_at(&mut self, now: DateTime<Utc>, sink: &mut impl RenderSink) {
        let force = std::mem::take(&mut self.force_pending);
        if force {
            self.memo.invalidate();
        }

        let Some(city) = self.registry.get(&self.selection.city_id) else {
            // Invariant: selection always refers to a registered city
            return;
        };
        let zone = city.time_zone;
        let language = self.selection.language;
        let snapshot = compute_snapshot_at(zone, now);

        // Sub-second readout updates on every tick
        sink.set_text(Region::ClockMillis, &snapshot.format_millis());

        if !force && self.memo.last_second == Some(snapshot.second) {
            // No-op tick: nothing else changed
            return;
        }
        self.memo.last_second = Some(snapshot.second);

        let time_text = self
            .formatters
            .get(FormatterKind::Time, language, zone)
            .format(now);
        sink.set_text(Region::ClockTime, &time_text);
        sink.set_attr(Region::ClockTime, "datetime", &snapshot.iso_instant);
        sink.set_text(Region::ClockAmPm, &snapshot.meridiem.to_string());

        if force || self.memo.last_minute != Some(snapshot.minute) {
            self.memo.last_minute = Some(snapshot.minute);
            let date_text = self
                .formatters
                .get(FormatterKind::Date, language, zone)
                .format(now);
            sink.set_text(Region::ClockDate, &date_text);
            sink.replay_cue(Region::ClockTime, Cue::MinuteChange);
            sink.replay_cue(Region::ClockAmPm, Cue::MinuteChange);
            self.memo.timezone_dirty = true;
        } else {
            sink.replay_cue(Region::ClockTime, Cue::SecondChange);
        }
        sink.replay_cue(Region::ClockMillis, Cue::SecondChange);

        if force {
            let t = translation(language);
            for (region, text) in chrome_text(language) {
                sink.set_text(region, text);
            }
            sink.set_attr(Region::LanguageToggle, "aria-label", t.toggle_aria);
            sink.set_attr(Region::LanguageToggle, "title", t.toggle_aria);
            sink.set_text(Region::CityName, &active_city_text(city, language));
        }

        // Day/night status of every city and the map overlay angle
        for other in self.registry.iter() {
            let view = city_view(
                other,
                language,
                other.id == self.selection.city_id,
                now,
            );
            sink.set_city(&other.id, &view);
        }
        sink.set_overlay_rotation(overlay_rotation_deg(now));

        if self.memo.timezone_dirty {
            let label = self
                .formatters
                .get(FormatterKind::ZoneName, language, zone)
                .format(now);
            sink.set_text(Region::TimezoneLabel, &label);
            self.memo.timezone_dirty = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;

    #[derive(Default)]
    struct RecordingSink {
        texts: HashMap<Region, String>,
        text_writes: Vec<Region>,
        attrs: Vec<(Region, String, String)>,
        cues: Vec<(Region, Cue)>,
        city_writes: Vec<String>,
        city_views: HashMap<String, CityView>,
        overlay: Option<f64>,
    }

    impl RenderSink for RecordingSink {
        fn set_text(&mut self, region: Region, value: &str) {
            self.texts.insert(region, value.to_string());
            self.text_writes.push(region);
        }

        fn set_attr(&mut self, region: Region, name: &str, value: &str) {
            self.attrs
                .push((region, name.to_string(), value.to_string()));
        }

        fn set_city(&mut self, city_id: &str, view: &CityView) {
            self.city_writes.push(city_id.to_string());
            self.city_views.insert(city_id.to_string(), view.clone());
        }

        fn set_overlay_rotation(&mut self, degrees: f64) {
            self.overlay = Some(degrees);
        }

        fn replay_cue(&mut self, region: Region, cue: Cue) {
            self.cues.push((region, cue));
        }
    }

    fn clock() -> WorldClock {
        let registry = CityRegistry::with_default_cities().unwrap();
        WorldClock::new(registry, Language::En)
    }

    fn at(h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, h, mi, s).unwrap()
    }

    #[test]
    fn test_first_tick_paints_everything() {
        let mut clock = clock();
        let mut sink = RecordingSink::default();
        clock.tick_at(at(3, 0, 10), &mut sink);

        for region in [
            Region::ClockTime,
            Region::ClockMillis,
            Region::ClockAmPm,
            Region::ClockDate,
            Region::CityName,
            Region::TimezoneLabel,
            Region::Subtitle,
            Region::MapHeading,
            Region::MapInstruction,
            Region::LanguageToggle,
        ] {
            assert!(sink.texts.contains_key(&region), "{:?} not painted", region);
        }
        // Default selection: Seoul at noon KST
        assert_eq!(sink.texts[&Region::ClockTime], "12:00:10");
        assert_eq!(sink.texts[&Region::ClockAmPm], "PM");
        assert_eq!(sink.texts[&Region::CityName], "Seoul, South Korea");
        assert_eq!(sink.texts[&Region::TimezoneLabel], "Asia/Seoul (GMT+09:00)");
        assert_eq!(sink.texts[&Region::ClockDate], "Thursday, January 15, 2026");
        assert_eq!(sink.city_writes.len(), 10);
        assert!(sink.overlay.is_some());
        assert!(sink.city_views["seoul"].is_active);
        assert!(!sink.city_views["tokyo"].is_active);
    }

    #[test]
    fn test_unchanged_second_is_noop() {
        let mut clock = clock();
        let mut sink = RecordingSink::default();
        clock.tick_at(at(3, 0, 10), &mut sink);

        let base = at(3, 0, 10) + chrono::Duration::milliseconds(20);
        let mut sink = RecordingSink::default();
        clock.tick_at(base, &mut sink);
        assert_eq!(sink.text_writes, vec![Region::ClockMillis]);
        assert_eq!(sink.texts[&Region::ClockMillis], ".020");
        assert!(sink.cues.is_empty());
        assert!(sink.city_writes.is_empty());
        assert!(sink.overlay.is_none());
    }

    #[test]
    fn test_second_change_updates_time_group() {
        let mut clock = clock();
        let mut sink = RecordingSink::default();
        clock.tick_at(at(3, 0, 10), &mut sink);

        let mut sink = RecordingSink::default();
        clock.tick_at(at(3, 0, 11), &mut sink);
        assert!(sink.text_writes.contains(&Region::ClockTime));
        assert!(sink.text_writes.contains(&Region::ClockAmPm));
        assert!(!sink.text_writes.contains(&Region::ClockDate));
        assert!(!sink.text_writes.contains(&Region::Subtitle));
        assert!(!sink.text_writes.contains(&Region::TimezoneLabel));
        assert!(sink.cues.contains(&(Region::ClockTime, Cue::SecondChange)));
        assert!(sink.cues.contains(&(Region::ClockMillis, Cue::SecondChange)));
        assert!(!sink
            .cues
            .iter()
            .any(|(_, cue)| *cue == Cue::MinuteChange));
        assert_eq!(sink.city_writes.len(), 10);
        assert!(sink.overlay.is_some());
    }

    #[test]
    fn test_minute_change_updates_date_and_label() {
        let mut clock = clock();
        let mut sink = RecordingSink::default();
        clock.tick_at(at(3, 0, 59), &mut sink);

        let mut sink = RecordingSink::default();
        clock.tick_at(at(3, 1, 0), &mut sink);
        assert!(sink.text_writes.contains(&Region::ClockDate));
        assert!(sink.text_writes.contains(&Region::TimezoneLabel));
        assert!(sink.cues.contains(&(Region::ClockTime, Cue::MinuteChange)));
        assert!(sink.cues.contains(&(Region::ClockAmPm, Cue::MinuteChange)));
    }

    #[test]
    fn test_select_city_forces_full_repaint() {
        let mut clock = clock();
        let mut sink = RecordingSink::default();
        clock.tick_at(at(3, 0, 10), &mut sink);

        assert!(clock.handle_event(InputEvent::SelectCity("tokyo".to_string())));
        assert!(clock.force_pending());

        // Same instant, same second: only force explains the repaint
        let mut sink = RecordingSink::default();
        clock.tick_at(at(3, 0, 10), &mut sink);
        assert!(sink.text_writes.contains(&Region::ClockTime));
        assert!(sink.text_writes.contains(&Region::ClockDate));
        assert!(sink.text_writes.contains(&Region::Subtitle));
        assert!(sink.text_writes.contains(&Region::TimezoneLabel));
        assert_eq!(sink.texts[&Region::CityName], "Tokyo, Japan");
        assert_eq!(sink.texts[&Region::TimezoneLabel], "Asia/Tokyo (GMT+09:00)");
        assert!(sink.city_views["tokyo"].is_active);
        assert!(!sink.city_views["seoul"].is_active);
    }

    #[test]
    fn test_unknown_city_selection_is_ignored() {
        let mut clock = clock();
        let mut sink = RecordingSink::default();
        clock.tick_at(at(3, 0, 10), &mut sink);

        assert!(!clock.handle_event(InputEvent::SelectCity("atlantis".to_string())));
        assert_eq!(clock.selection().city_id, "seoul");
        assert!(!clock.force_pending());

        // No force armed: the unchanged second stays a no-op
        let mut sink = RecordingSink::default();
        clock.tick_at(at(3, 0, 10), &mut sink);
        assert_eq!(sink.text_writes, vec![Region::ClockMillis]);
    }

    #[test]
    fn test_language_toggle_switches_chrome_not_city() {
        let mut clock = clock();
        let mut sink = RecordingSink::default();
        clock.tick_at(at(3, 0, 10), &mut sink);
        let time_before = sink.texts[&Region::ClockTime].clone();

        assert!(clock.handle_event(InputEvent::ToggleLanguage));
        let mut sink = RecordingSink::default();
        clock.tick_at(at(3, 0, 10), &mut sink);

        assert_eq!(clock.selection().city_id, "seoul");
        assert_eq!(sink.texts[&Region::Subtitle], "지금의 순간을 확인하세요");
        assert_eq!(sink.texts[&Region::LanguageToggle], "EN");
        assert_eq!(sink.texts[&Region::CityName], "서울, 대한민국");
        assert_eq!(sink.texts[&Region::ClockDate], "2026년 1월 15일 목요일");
        assert_eq!(sink.texts[&Region::ClockTime], time_before);
        assert_eq!(sink.city_views["seoul"].label, "서울");
    }

    #[test]
    fn test_repeated_forced_ticks_are_idempotent() {
        let instant = at(3, 0, 10);
        let mut first = RecordingSink::default();
        clock().tick_at(instant, &mut first);
        let mut second = RecordingSink::default();
        clock().tick_at(instant, &mut second);
        assert_eq!(first.texts, second.texts);
        assert_eq!(first.overlay, second.overlay);
        assert_eq!(first.city_views, second.city_views);
    }

    #[test]
    fn test_iso_instant_attr_set_on_second_change() {
        let mut clock = clock();
        let mut sink = RecordingSink::default();
        clock.tick_at(at(3, 0, 10), &mut sink);
        assert!(sink
            .attrs
            .iter()
            .any(|(region, name, value)| *region == Region::ClockTime
                && name == "datetime"
                && value.starts_with("2026-01-15T12:00:10")));
    }
}
