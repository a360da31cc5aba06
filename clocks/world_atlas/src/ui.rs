//! UI module - egui header, city list, and settings
//!
//! All interactive chrome reads its text from the screen state (already
//! projected into the current language) and reports user input back as
//! pending events; nothing here mutates the clock directly.

use nannou_egui::egui;
use shared::{CityRegistry, Region};

use crate::screen::ScreenState;

/// Draw the header bar: subtitle and the language toggle button
pub fn draw_header_bar(ctx: &egui::Context, screen: &ScreenState) -> bool {
    let mut toggle_clicked = false;

    egui::TopBottomPanel::top("header_bar")
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(screen.text(Region::Subtitle));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(screen.text(Region::LanguageToggle)).clicked() {
                        toggle_clicked = true;
                    }
                });
            });
        });

    toggle_clicked
}

/// Draw the city list panel. Returns the id of a clicked city.
pub fn draw_city_panel(
    ctx: &egui::Context,
    registry: &CityRegistry,
    screen: &ScreenState,
) -> Option<String> {
    let mut selected = None;

    egui::SidePanel::right("city_panel")
        .resizable(false)
        .default_width(230.0)
        .show(ctx, |ui| {
            ui.heading(screen.text(Region::MapHeading));
            ui.label(screen.text(Region::MapInstruction));
            ui.separator();

            for city in registry.iter() {
                // Views appear after the first tick has painted the surface
                let Some(view) = screen.city(&city.id) else {
                    continue;
                };
                let row = format!("{} {}", view.glyph, view.label);
                let response = ui
                    .selectable_label(view.is_active, &row)
                    .on_hover_text(&view.tooltip);
                if response.clicked() {
                    selected = Some(city.id.clone());
                }
            }
        });

    selected
}

/// Draw the settings panel. Returns true when a setting changed.
pub fn draw_settings_panel(ctx: &egui::Context, reduced_motion: &mut bool) -> bool {
    let mut changed = false;

    egui::Window::new("Settings")
        .collapsible(true)
        .resizable(false)
        .default_width(200.0)
        .anchor(egui::Align2::LEFT_BOTTOM, [10.0, -10.0])
        .show(ctx, |ui| {
            if ui.checkbox(reduced_motion, "Reduced Motion").changed() {
                changed = true;
            }
            ui.label("Disables change flashes");
            ui.separator();
            ui.label("Press R to toggle · L switches language");
        });

    changed
}
