//! Screen state - the concrete render sink behind the widget
//!
//! Holds the last value written to every region, the per-city views, the
//! overlay angle, and the start times of replayed visual cues. The scheduler
//! writes here; `drawing` and `ui` read from here. Writes to regions this
//! surface has no use for are simply dropped.

use std::collections::HashMap;
use std::time::Instant;

use shared::{CityView, Cue, Region, RenderSink};

/// Everything currently visible on the widget surface
#[derive(Debug, Default)]
pub struct ScreenState {
    texts: HashMap<Region, String>,
    cities: HashMap<String, CityView>,
    overlay_rotation: f64,
    cues: HashMap<(Region, Cue), Instant>,
    /// ISO instant of the displayed time, surfaced as a tooltip
    iso_instant: String,
}

impl ScreenState {
    pub fn new() -> ScreenState {
        ScreenState::default()
    }

    /// Current text of a region, empty until first painted
    pub fn text(&self, region: Region) -> &str {
        self.texts.get(&region).map(String::as_str).unwrap_or("")
    }

    pub fn city(&self, id: &str) -> Option<&CityView> {
        self.cities.get(id)
    }

    pub fn overlay_rotation(&self) -> f64 {
        self.overlay_rotation
    }

    pub fn iso_instant(&self) -> &str {
        &self.iso_instant
    }

    /// Seconds since a cue was last replayed on a region
    pub fn cue_age(&self, region: Region, cue: Cue) -> Option<f32> {
        self.cues
            .get(&(region, cue))
            .map(|started| started.elapsed().as_secs_f32())
    }
}

impl RenderSink for ScreenState {
    fn set_text(&mut self, region: Region, value: &str) {
        self.texts.insert(region, value.to_string());
    }

    fn set_attr(&mut self, region: Region, name: &str, value: &str) {
        if region == Region::ClockTime && name == "datetime" {
            self.iso_instant = value.to_string();
        }
        // Other attributes have no visual counterpart on this surface
    }

    fn set_city(&mut self, city_id: &str, view: &CityView) {
        self.cities.insert(city_id.to_string(), view.clone());
    }

    fn set_overlay_rotation(&mut self, degrees: f64) {
        self.overlay_rotation = degrees;
    }

    fn replay_cue(&mut self, region: Region, cue: Cue) {
        // Restart the animation from now, mirroring a class re-toggle
        self.cues.insert((region, cue), Instant::now());
    }
}
