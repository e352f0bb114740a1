use eframe::egui::{CentralPanel, Context, Grid, ProgressBar, RichText};

use crate::app::LoadingState;
use crate::data::{AssetName, AssetStatus};
use crate::ui::{UI_CONFIG, UI_TEXT};

pub(crate) fn render_loading(ctx: &Context, state: &LoadingState) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(
                RichText::new(&UI_TEXT.ls_title)
                    .size(24.0)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.label(
                RichText::new(&UI_TEXT.ls_subtitle)
                    .italics()
                    .color(UI_CONFIG.colors.label),
            );
            ui.add_space(20.0);

            let total = AssetName::ALL.len();
            let done = state.settled_count();
            let progress = done as f32 / total as f32;
            ui.add(
                ProgressBar::new(progress)
                    .animate(true)
                    .text(format!("{}/{} assets", done, total)),
            );
            ui.add_space(20.0);
        });

        render_status_grid(ui, state);
    });
}

fn render_status_grid(ui: &mut eframe::egui::Ui, state: &LoadingState) {
    ui.vertical_centered(|ui| {
        Grid::new("asset_status_grid")
            .striped(true)
            .spacing([30.0, 8.0])
            .show(ui, |ui| {
                for name in AssetName::ALL {
                    let status = state.status_of(name);
                    let (text, color) = match status {
                        AssetStatus::Pending => ("-".to_string(), UI_CONFIG.colors.label),
                        AssetStatus::Loading => {
                            (UI_TEXT.ls_loading.clone(), UI_CONFIG.colors.warning)
                        }
                        AssetStatus::Loaded(n) => {
                            (format!("+{}", n), UI_CONFIG.colors.model_series)
                        }
                        AssetStatus::Failed(_) => {
                            (UI_TEXT.ls_failed.clone(), UI_CONFIG.colors.error)
                        }
                        AssetStatus::Skipped => {
                            (UI_TEXT.ls_skipped.clone(), UI_CONFIG.colors.label)
                        }
                    };
                    ui.label(RichText::new(name.label()).strong());
                    ui.label(RichText::new(text).color(color));
                    ui.end_row();
                }
            });
    });
}
