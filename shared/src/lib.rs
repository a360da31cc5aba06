//! Shared core of the world atlas clock
//!
//! Zone math, the city registry, bilingual text tables, the formatter cache,
//! UI projection, and the render scheduler. Everything here is headless and
//! deterministic given an instant; the widget crate supplies the window and
//! the concrete render sink.

pub mod cities;
pub mod config;
pub mod formatter;
pub mod i18n;
pub mod projection;
pub mod scheduler;
pub mod time_engine;

pub use cities::{City, CityRegistry, Localized, RegistryError};
pub use config::{config_dir, config_path, load_config, save_config, ConfigError};
pub use formatter::{ClockFormatter, FormatterCache, FormatterKind};
pub use i18n::{translation, Language, Translation};
pub use projection::{active_city_text, chrome_text, city_view, timezone_label, CityView};
pub use scheduler::{Cue, InputEvent, Region, RenderSink, SelectionState, WorldClock};
pub use time_engine::{
    compute_snapshot, compute_snapshot_at, format_gmt_offset, is_daytime, overlay_rotation_deg,
    parse_timezone, utc_offset_minutes, ClockSnapshot, Meridiem,
};
