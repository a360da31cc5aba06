//! Time engine - zone math for the world atlas clock
//!
//! Projects a reference instant into wall-clock fields for a target time zone
//! and derives the per-instant UTC offset. Offsets are never cached: daylight
//! saving rules make them a function of the instant, so every call re-reads
//! the zone rules through chrono-tz.

use chrono::{DateTime, Datelike, Offset, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// AM/PM indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Meridiem {
    AM,
    PM,
}

impl std::fmt::Display for Meridiem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Meridiem::AM => write!(f, "AM"),
            Meridiem::PM => write!(f, "PM"),
        }
    }
}

/// Wall-clock fields for one render tick in the selected zone.
///
/// Derived data only: recomputed from the real-time clock on every tick,
/// never stored between ticks.
#[derive(Debug, Clone)]
pub struct ClockSnapshot {
    /// Year (e.g., 2026)
    pub year: i32,
    /// Month (1-12)
    pub month: u32,
    /// Day of month (1-31)
    pub day: u32,
    /// Day of week
    pub weekday: Weekday,
    /// Hour in 12-hour format (1-12)
    pub hour12: u32,
    /// Hour in 24-hour format (0-23)
    pub hour24: u32,
    /// Minute (0-59)
    pub minute: u32,
    /// Second (0-59)
    pub second: u32,
    /// Millisecond (0-999), drives the sub-second readout
    pub millisecond: u32,
    /// AM/PM indicator
    pub meridiem: Meridiem,
    /// UTC offset in minutes at this exact instant (e.g., 540 for UTC+9)
    pub utc_offset_minutes: i32,
    /// RFC 3339 rendering of the zoned instant, for accessible markup
    pub iso_instant: String,
    /// The raw zoned DateTime for additional formatting needs
    pub local_datetime: DateTime<Tz>,
}

impl ClockSnapshot {
    /// Format the time as "hh:mm:ss" in 12-hour form
    pub fn format_time(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour12, self.minute, self.second)
    }

    /// Format the sub-second suffix as ".mmm"
    pub fn format_millis(&self) -> String {
        format!(".{:03}", self.millisecond)
    }
}

/// Compute the current snapshot for a given timezone
pub fn compute_snapshot(tz: Tz) -> ClockSnapshot {
    compute_snapshot_at(tz, Utc::now())
}

/// Compute the snapshot for a given timezone at a specific instant
pub fn compute_snapshot_at(tz: Tz, now_utc: DateTime<Utc>) -> ClockSnapshot {
    let local = now_utc.with_timezone(&tz);

    let hour24 = local.hour();
    let hour12 = match hour24 {
        0 => 12,
        1..=12 => hour24,
        _ => hour24 - 12,
    };
    let meridiem = if hour24 < 12 { Meridiem::AM } else { Meridiem::PM };

    // Offset read from the zoned datetime itself, so a DST transition at the
    // reference instant is reflected immediately.
    let utc_offset_minutes = local.offset().fix().local_minus_utc() / 60;

    ClockSnapshot {
        year: local.year(),
        month: local.month(),
        day: local.day(),
        weekday: local.weekday(),
        hour12,
        hour24,
        minute: local.minute(),
        second: local.second(),
        millisecond: local.timestamp_subsec_millis() % 1000,
        meridiem,
        utc_offset_minutes,
        iso_instant: local.to_rfc3339(),
        local_datetime: local,
    }
}

/// UTC offset of a zone at an instant, in whole minutes
pub fn utc_offset_minutes(tz: Tz, at: DateTime<Utc>) -> i32 {
    at.with_timezone(&tz).offset().fix().local_minus_utc() / 60
}

/// Format an offset in minutes as "GMT±hh:mm"
pub fn format_gmt_offset(offset_minutes: i32) -> String {
    let sign = if offset_minutes >= 0 { '+' } else { '-' };
    let abs_minutes = offset_minutes.abs();
    format!("GMT{}{:02}:{:02}", sign, abs_minutes / 60, abs_minutes % 60)
}

/// Day/night split on the fixed 06:00-18:00 local window.
///
/// Deliberately coarse: no twilight or sunrise model, a city is "day" iff its
/// local hour falls in [6, 18).
pub fn is_daytime(hour24: u32) -> bool {
    (6..18).contains(&hour24)
}

/// Rotation angle of the day/night map overlay, in degrees.
///
/// A continuous function of UTC time-of-day only: one full negative
/// revolution per UTC day, independent of the selected city.
pub fn overlay_rotation_deg(now_utc: DateTime<Utc>) -> f64 {
    let minutes = (now_utc.hour() * 60 + now_utc.minute()) as f64;
    -(minutes / 1440.0) * 360.0
}

/// Parse a timezone string into a Tz
pub fn parse_timezone(tz_str: &str) -> Result<Tz, String> {
    tz_str
        .parse::<Tz>()
        .map_err(|_| format!("Invalid timezone: {}", tz_str))
}
