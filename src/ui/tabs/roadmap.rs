use eframe::egui::{Color32, RichText, Ui};

use crate::ui::utils::{section_heading, spaced_separator, subsection_heading};
use crate::ui::{UI_CONFIG, UI_TEXT};

/// Purely informational tab: business impact and technical roadmap cards.
pub(crate) struct RoadmapPanel;

impl RoadmapPanel {
    pub fn render(ui: &mut Ui) {
        section_heading(ui, &UI_TEXT.rm_heading);
        ui.label(
            RichText::new(&UI_TEXT.rm_caption)
                .small()
                .color(UI_CONFIG.colors.label),
        );
        ui.add_space(12.0);

        ui.columns(2, |cols| {
            render_column(
                &mut cols[0],
                &UI_TEXT.rm_business_heading,
                &UI_TEXT.rm_business_caption,
                UI_TEXT.rm_business_cards,
                UI_CONFIG.colors.card_business,
            );
            render_column(
                &mut cols[1],
                &UI_TEXT.rm_tech_heading,
                &UI_TEXT.rm_tech_caption,
                UI_TEXT.rm_tech_cards,
                UI_CONFIG.colors.card_tech,
            );
        });

        spaced_separator(ui);
        ui.label(RichText::new(&UI_TEXT.rm_conclusion).strong());
    }
}

fn render_column(
    ui: &mut Ui,
    heading: &str,
    caption: &str,
    cards: &[(&str, &str, &str)],
    fill: Color32,
) {
    subsection_heading(ui, heading);
    ui.label(RichText::new(caption).small().color(UI_CONFIG.colors.label));
    ui.add_space(8.0);

    for (icon, title, body) in cards {
        card(ui, icon, title, body, fill);
        ui.add_space(10.0);
    }
}

fn card(ui: &mut Ui, icon: &str, title: &str, body: &str, fill: Color32) {
    UI_CONFIG.card_frame(fill).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new(format!("{} {}", icon, title))
                .strong()
                .color(Color32::WHITE),
        );
        ui.add_space(4.0);
        ui.label(RichText::new(body).color(UI_CONFIG.colors.card_text));
    });
}
