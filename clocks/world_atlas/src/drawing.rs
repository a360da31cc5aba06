//! Drawing module - clock readout and world map rendering
//!
//! Renders the primary readout (time, sub-second suffix, AM/PM, date, city,
//! zone label) and the stylized world map with city markers and the night
//! band, using nannou's Draw API. Cue flashes decay over a short window
//! unless reduced motion is on.

use nannou::prelude::*;
use shared::{CityRegistry, Cue, Region};

use crate::screen::ScreenState;

/// How long a cue flash stays visible, in seconds
const CUE_FLASH_SECS: f32 = 0.6;

/// Color palette for the world atlas theme
pub mod colors {
    use nannou::prelude::*;

    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 13,
        green: 17,
        blue: 28,
        standard: std::marker::PhantomData,
    };
    pub const TEXT_PRIMARY: Srgb<u8> = Srgb {
        red: 236,
        green: 240,
        blue: 248,
        standard: std::marker::PhantomData,
    };
    pub const TEXT_SECONDARY: Srgb<u8> = Srgb {
        red: 150,
        green: 158,
        blue: 176,
        standard: std::marker::PhantomData,
    };
    pub const ACCENT: Srgb<u8> = Srgb {
        red: 255,
        green: 196,
        blue: 80,
        standard: std::marker::PhantomData,
    };
    pub const MAP_PANEL: Srgb<u8> = Srgb {
        red: 22,
        green: 30,
        blue: 48,
        standard: std::marker::PhantomData,
    };
    pub const MAP_GRID: Srgb<u8> = Srgb {
        red: 38,
        green: 48,
        blue: 70,
        standard: std::marker::PhantomData,
    };
    pub const CITY_DAY: Srgb<u8> = Srgb {
        red: 255,
        green: 210,
        blue: 110,
        standard: std::marker::PhantomData,
    };
    pub const CITY_NIGHT: Srgb<u8> = Srgb {
        red: 110,
        green: 140,
        blue: 220,
        standard: std::marker::PhantomData,
    };
}

/// Flash intensity for a cue, 1.0 right after replay fading to 0.0
fn cue_flash(screen: &ScreenState, region: Region, cue: Cue) -> f32 {
    match screen.cue_age(region, cue) {
        Some(age) if age < CUE_FLASH_SECS => 1.0 - age / CUE_FLASH_SECS,
        _ => 0.0,
    }
}

/// Draw the primary readout (left panel)
pub fn draw_clock_panel(draw: &Draw, screen: &ScreenState, rect: Rect, reduced_motion: bool) {
    let center = rect.xy();

    let time_text = screen.text(Region::ClockTime);
    let time_y = 70.0;

    // Minute flash is a stronger glow than the second flash
    if !reduced_motion {
        let flash = cue_flash(screen, Region::ClockTime, Cue::MinuteChange)
            .max(cue_flash(screen, Region::ClockTime, Cue::SecondChange) * 0.4);
        if flash > 0.0 {
            draw.text(time_text)
                .xy(center + vec2(-30.0, time_y))
                .color(srgba(255u8, 196u8, 80u8, (flash * 90.0) as u8))
                .font_size(78)
                .w(rect.w());
        }
    }

    draw.text(time_text)
        .xy(center + vec2(-30.0, time_y))
        .color(colors::TEXT_PRIMARY)
        .font_size(74)
        .w(rect.w());

    // Sub-second suffix, right of the time digits
    let millis_alpha = if reduced_motion {
        160u8
    } else {
        let flash = cue_flash(screen, Region::ClockMillis, Cue::SecondChange);
        160 + (flash * 95.0) as u8
    };
    draw.text(screen.text(Region::ClockMillis))
        .xy(center + vec2(170.0, time_y - 18.0))
        .color(srgba(
            colors::ACCENT.red,
            colors::ACCENT.green,
            colors::ACCENT.blue,
            millis_alpha,
        ))
        .font_size(26)
        .w(120.0);

    // AM/PM superscript
    draw.text(screen.text(Region::ClockAmPm))
        .xy(center + vec2(170.0, time_y + 22.0))
        .color(colors::ACCENT)
        .font_size(22)
        .w(100.0);

    // Date line
    draw.text(screen.text(Region::ClockDate))
        .xy(center + vec2(0.0, 8.0))
        .color(colors::TEXT_SECONDARY)
        .font_size(20)
        .w(rect.w());

    // Active city line
    draw.text(screen.text(Region::CityName))
        .xy(center + vec2(0.0, -32.0))
        .color(colors::TEXT_PRIMARY)
        .font_size(24)
        .w(rect.w());

    // Zone label
    draw.text(screen.text(Region::TimezoneLabel))
        .xy(center + vec2(0.0, -66.0))
        .color(colors::TEXT_SECONDARY)
        .font_size(15)
        .w(rect.w());
}

/// Project lat/lon onto a map rect (equirectangular)
fn map_point(rect: Rect, lat: f32, lon: f32) -> Point2 {
    let x = rect.left() + (lon + 180.0) / 360.0 * rect.w();
    let y = rect.bottom() + (lat + 90.0) / 180.0 * rect.h();
    pt2(x, y)
}

/// Draw the world map panel: grid, night band, city markers
pub fn draw_world_map(draw: &Draw, registry: &CityRegistry, screen: &ScreenState, rect: Rect) {
    // Panel backdrop
    draw.rect()
        .xy(rect.xy())
        .wh(rect.wh())
        .color(colors::MAP_PANEL);

    // Graticule every 30 degrees
    for i in 1..12 {
        let x = rect.left() + rect.w() * (i as f32 / 12.0);
        draw.line()
            .start(pt2(x, rect.bottom()))
            .end(pt2(x, rect.top()))
            .weight(0.5)
            .color(colors::MAP_GRID);
    }
    for i in 1..6 {
        let y = rect.bottom() + rect.h() * (i as f32 / 6.0);
        draw.line()
            .start(pt2(rect.left(), y))
            .end(pt2(rect.right(), y))
            .weight(0.5)
            .color(colors::MAP_GRID);
    }

    draw_night_band(draw, screen.overlay_rotation(), rect);

    // City markers on top of the band
    for city in registry.iter() {
        let Some(view) = screen.city(&city.id) else {
            continue;
        };
        let pos = map_point(rect, city.lat, city.lon);
        let color = if view.is_day {
            colors::CITY_DAY
        } else {
            colors::CITY_NIGHT
        };

        if view.is_active {
            draw.ellipse()
                .xy(pos)
                .radius(9.0)
                .no_fill()
                .stroke(colors::ACCENT)
                .stroke_weight(2.0);
        }
        draw.ellipse().xy(pos).radius(4.5).color(color);

        draw.text(&view.label)
            .xy(pos + vec2(0.0, 14.0))
            .color(if view.is_active {
                colors::TEXT_PRIMARY
            } else {
                colors::TEXT_SECONDARY
            })
            .font_size(12)
            .w(140.0);
    }
}

/// Shade the half of the map currently in night.
///
/// The scheduler publishes the overlay rotation as a negative angle, one
/// revolution per UTC day; the band center follows the antisolar longitude.
fn draw_night_band(draw: &Draw, rotation_deg: f64, rect: Rect) {
    // Fraction of the UTC day elapsed, recovered from the rotation
    let day_fraction = (-rotation_deg / 360.0).rem_euclid(1.0) as f32;
    // At 00:00 UTC it is midnight over Greenwich: night centered at lon 0
    let night_center = (0.5 - day_fraction).rem_euclid(1.0);

    let band_color = srgba(5u8, 8u8, 18u8, 120u8);
    let left_edge = night_center - 0.25;
    let right_edge = night_center + 0.25;

    // The band may wrap around the antimeridian; draw up to two rects
    for (start, end) in [
        (left_edge.max(0.0), right_edge.min(1.0)),
        (left_edge + 1.0, 1.0_f32.min(right_edge + 1.0)),
        ((left_edge - 1.0).max(0.0), right_edge - 1.0),
    ] {
        if end <= start {
            continue;
        }
        let x0 = rect.left() + start * rect.w();
        let x1 = rect.left() + end * rect.w();
        draw.rect()
            .x_y((x0 + x1) / 2.0, rect.y())
            .w_h(x1 - x0, rect.h())
            .color(band_color);
    }
}

/// Calculate layout rectangles for the two-panel layout
pub struct Layout {
    pub clock_panel: Rect,
    pub map_panel: Rect,
}

impl Layout {
    pub fn calculate(window_rect: Rect) -> Self {
        let padding = 30.0;
        let inner = window_rect.pad(padding);

        // Clock readout on the left 45%, map on the right
        let clock_w = inner.w() * 0.45;
        Layout {
            clock_panel: Rect::from_x_y_w_h(
                inner.left() + clock_w / 2.0,
                inner.y(),
                clock_w,
                inner.h(),
            ),
            map_panel: Rect::from_x_y_w_h(
                inner.right() - (inner.w() - clock_w) / 2.0 + 10.0,
                inner.y(),
                inner.w() - clock_w - 20.0,
                inner.h() * 0.8,
            ),
        }
    }
}
