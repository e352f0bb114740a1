use eframe::egui::{Color32, RichText, Ui};

use crate::ui::ui_config::UI_CONFIG;

pub(crate) fn section_heading(ui: &mut Ui, text: &str) {
    ui.heading(RichText::new(text).color(UI_CONFIG.colors.heading));
    ui.add_space(4.0);
}

pub(crate) fn subsection_heading(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .size(16.0)
            .color(UI_CONFIG.colors.subsection_heading),
    );
}

pub(crate) fn spaced_separator(ui: &mut Ui) {
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);
}

/// A KPI block: small gray label over a large value, with an optional
/// small colored delta line underneath.
pub(crate) fn metric(
    ui: &mut Ui,
    label: &str,
    value: &str,
    delta: Option<(&str, Color32)>,
) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().color(UI_CONFIG.colors.label));
        ui.label(RichText::new(value).size(22.0).strong());
        if let Some((text, color)) = delta {
            ui.label(RichText::new(text).small().color(color));
        }
    });
}

pub(crate) fn format_days(days: f64) -> String {
    format!("{:.1} days", days)
}

pub(crate) fn format_km(km: f64) -> String {
    format!("{:.1} km", km)
}
