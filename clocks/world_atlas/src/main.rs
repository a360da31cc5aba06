//! World Atlas Clock
//!
//! A bilingual world clock: live local time for a selected city, a stylized
//! world map with day/night status for ten key cities, and a Korean/English
//! language toggle. The core (zone math, formatter cache, render scheduling)
//! lives in the `shared` crate; this binary supplies the window, the render
//! sink, and the input plumbing.

mod drawing;
mod screen;
mod ui;

use std::time::Duration;

use nannou::prelude::*;
use nannou_egui::{self, Egui};
use serde::{Deserialize, Serialize};
use shared::{CityRegistry, InputEvent, Language, WorldClock};

use crate::drawing::{colors, draw_clock_panel, draw_world_map, Layout};
use crate::screen::ScreenState;

const WIDGET_NAME: &str = "world_atlas";
/// Scheduler cadence; forced repaints bypass the gate
const TICK_PERIOD: Duration = Duration::from_millis(50);

fn main() {
    nannou::app(model).update(update).run();
}

/// Persisted configuration.
///
/// Only presentation preferences: language and city selection intentionally
/// reset on every launch.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Config {
    reduced_motion: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reduced_motion: false,
        }
    }
}

/// Application state
struct Model {
    /// The clock core: registry, selection, memo, formatter cache
    clock: WorldClock,
    /// Render sink the scheduler writes into
    screen: ScreenState,
    /// `since_start` of the last scheduler tick
    last_tick: Option<Duration>,
    /// Reduced motion preference
    reduced_motion: bool,
    /// egui integration
    egui: Egui,
}

fn save_config(model: &Model) {
    let config = Config {
        reduced_motion: model.reduced_motion,
    };
    if let Err(e) = shared::save_config(WIDGET_NAME, &config) {
        eprintln!("Failed to save config: {}", e);
    }
}

fn model(app: &App) -> Model {
    // Create window
    let window_id = app
        .new_window()
        .title("World Atlas Clock")
        .size(1100, 640)
        .view(view)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    // Load configuration
    let config: Config = shared::load_config(WIDGET_NAME)
        .ok()
        .flatten()
        .unwrap_or_default();

    // An unsupported zone in the built-in set is fatal at startup
    let registry = match CityRegistry::with_default_cities() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Invalid city registry: {}", e);
            std::process::exit(1);
        }
    };

    Model {
        clock: WorldClock::new(registry, Language::Ko),
        screen: ScreenState::new(),
        last_tick: None,
        reduced_motion: config.reduced_motion,
        egui,
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    // Begin egui frame
    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    let mut reduced_motion = model.reduced_motion;

    let toggle_clicked = ui::draw_header_bar(&ctx, &model.screen);
    let selected_city = ui::draw_city_panel(&ctx, model.clock.registry(), &model.screen);
    let settings_changed = ui::draw_settings_panel(&ctx, &mut reduced_motion);

    drop(ctx);

    // Input events mutate selection state and arm a forced repaint; the
    // render itself always happens inside a tick.
    if toggle_clicked {
        model.clock.handle_event(InputEvent::ToggleLanguage);
    }
    if let Some(id) = selected_city {
        model.clock.handle_event(InputEvent::SelectCity(id));
    }

    if settings_changed {
        model.reduced_motion = reduced_motion;
        save_config(model);
    }

    // Fixed ~50ms cadence; a pending force runs on the next frame regardless
    let due = match model.last_tick {
        None => true,
        Some(prev) => update.since_start.saturating_sub(prev) >= TICK_PERIOD,
    };
    if due || model.clock.force_pending() {
        model.clock.tick(&mut model.screen);
        model.last_tick = Some(update.since_start);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    draw.background().color(colors::BACKGROUND);

    let layout = Layout::calculate(window_rect);
    draw_clock_panel(&draw, &model.screen, layout.clock_panel, model.reduced_motion);
    draw_world_map(&draw, model.clock.registry(), &model.screen, layout.map_panel);

    draw.to_frame(app, &frame).unwrap();

    // Render egui on top
    model.egui.draw_to_frame(&frame).unwrap();
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // L flips the language
        Key::L => {
            model.clock.handle_event(InputEvent::ToggleLanguage);
        }
        // R toggles reduced motion
        Key::R => {
            model.reduced_motion = !model.reduced_motion;
            save_config(model);
        }
        // Digits jump straight to a city (1-9, 0 is the tenth)
        _ => {
            let index = match key {
                Key::Key1 => Some(0),
                Key::Key2 => Some(1),
                Key::Key3 => Some(2),
                Key::Key4 => Some(3),
                Key::Key5 => Some(4),
                Key::Key6 => Some(5),
                Key::Key7 => Some(6),
                Key::Key8 => Some(7),
                Key::Key9 => Some(8),
                Key::Key0 => Some(9),
                _ => None,
            };
            if let Some(index) = index {
                let id = model
                    .clock
                    .registry()
                    .iter()
                    .nth(index)
                    .map(|city| city.id.clone());
                if let Some(id) = id {
                    model.clock.handle_event(InputEvent::SelectCity(id));
                }
            }
        }
    }
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Let egui handle raw events for keyboard and mouse input
    model.egui.handle_raw_event(event);
}
