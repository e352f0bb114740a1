use std::sync::LazyLock;

use colorgrad::Gradient;
use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Axis, AxisHints, Bar, BarChart, Legend, Plot, VPlacement};

use crate::config::HISTOGRAM;
use crate::data::{ComparisonTable, bin_center, bin_errors};
use crate::domain::ShipmentFeatures;
use crate::model::DeliveryModel;
use crate::ui::utils::{section_heading, spaced_separator, subsection_heading};
use crate::ui::{UI_CONFIG, UI_TEXT, metric};

/// Blue ramp for the importance bars, light to dark. Built once from
/// constant stops.
static IMPORTANCE_GRADIENT: LazyLock<colorgrad::LinearGradient> = LazyLock::new(|| {
    colorgrad::GradientBuilder::new()
        .colors(&[
            colorgrad::Color::from_html("#c6dbef").unwrap(),
            colorgrad::Color::from_html("#6baed6").unwrap(),
            colorgrad::Color::from_html("#2171b5").unwrap(),
            colorgrad::Color::from_html("#08306b").unwrap(),
        ])
        .build::<colorgrad::LinearGradient>()
        .expect("Failed to build importance gradient")
});

/// Performance tab: error-distribution histogram first, feature
/// importances second, each degrading to a notice when its backing asset
/// is missing.
pub(crate) struct PerformancePanel<'a> {
    comparison: Option<&'a ComparisonTable>,
    model: Option<&'a dyn DeliveryModel>,
}

impl<'a> PerformancePanel<'a> {
    pub fn new(
        comparison: Option<&'a ComparisonTable>,
        model: Option<&'a dyn DeliveryModel>,
    ) -> Self {
        Self { comparison, model }
    }

    pub fn render(&mut self, ui: &mut Ui) {
        section_heading(ui, &UI_TEXT.perf_heading);

        subsection_heading(ui, &UI_TEXT.hist_heading);
        ui.label(
            RichText::new(&UI_TEXT.hist_caption)
                .small()
                .color(UI_CONFIG.colors.label),
        );
        ui.add_space(6.0);

        match self.comparison {
            Some(table) => self.render_error_section(ui, table),
            None => {
                ui.label(
                    RichText::new(&UI_TEXT.warn_no_comparison).color(UI_CONFIG.colors.warning),
                );
            }
        }

        spaced_separator(ui);

        subsection_heading(ui, &UI_TEXT.imp_heading);
        ui.label(
            RichText::new(&UI_TEXT.imp_caption)
                .small()
                .color(UI_CONFIG.colors.label),
        );
        ui.add_space(6.0);

        match self.model {
            Some(model) => {
                render_importance_chart(ui, model.feature_importances());
                render_interpretation(ui);
            }
            None => {
                ui.label(RichText::new(&UI_TEXT.warn_no_model).color(UI_CONFIG.colors.warning));
            }
        }
    }

    fn render_error_section(&self, ui: &mut Ui, table: &ComparisonTable) {
        let stats = table.stats();

        ui.horizontal(|ui| {
            metric(ui, &UI_TEXT.kpi_legacy_mae, &format!("{:.1} days", stats.legacy_mae), None);
            ui.add_space(40.0);
            metric(
                ui,
                &UI_TEXT.kpi_model_mae,
                &format!("{:.1} days", stats.model_mae),
                Some((
                    &format!("{:.1}{}", stats.improvement_pct, UI_TEXT.kpi_better_suffix),
                    UI_CONFIG.colors.model_series,
                )),
            );
            ui.add_space(40.0);
            metric(ui, &UI_TEXT.kpi_sample, &format!("{}", stats.sample_count), None);
        });
        ui.add_space(8.0);

        let legacy_chart = histogram_chart(
            &UI_TEXT.hist_series_legacy,
            &table.legacy_errors(),
            UI_CONFIG.colors.legacy_series,
        );
        let model_chart = histogram_chart(
            &UI_TEXT.hist_series_model,
            &table.model_errors(),
            UI_CONFIG.colors.model_series,
        );

        let x_axis = AxisHints::new(Axis::X)
            .label(UI_TEXT.hist_x_axis.clone())
            .placement(VPlacement::Bottom);

        Plot::new("error_histogram")
            .legend(Legend::default())
            .height(280.0)
            .custom_x_axes(vec![x_axis])
            .include_x(HISTOGRAM.min_days)
            .include_x(HISTOGRAM.max_days)
            .allow_drag(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(legacy_chart);
                plot_ui.bar_chart(model_chart);
            });
    }
}

/// Overlaid translucent bars, one per non-empty bin.
fn histogram_chart(name: &str, errors: &[f64], color: Color32) -> BarChart {
    let bar_width = HISTOGRAM.bin_width() * 0.9;
    let bars: Vec<Bar> = bin_errors(errors)
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(idx, count)| Bar::new(bin_center(idx), *count as f64).width(bar_width))
        .collect();

    BarChart::new(name.to_string(), bars).color(color.linear_multiply(0.6))
}

fn render_importance_chart(ui: &mut Ui, importances: &[f64]) {
    // Sorted ascending so the heaviest factor lands on top of the chart.
    let mut ranked: Vec<(&str, f64)> = ShipmentFeatures::DISPLAY_LABELS
        .iter()
        .zip(importances.iter())
        .map(|(label, imp)| (*label, imp * 100.0))
        .collect();
    ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let max_pct = ranked.last().map_or(1.0, |(_, v)| *v).max(1e-9);

    let bars: Vec<Bar> = ranked
        .iter()
        .enumerate()
        .map(|(row, (label, pct))| {
            let rgba = IMPORTANCE_GRADIENT.at((pct / max_pct) as f32).to_rgba8();
            Bar::new(row as f64, *pct)
                .width(0.6)
                .fill(Color32::from_rgb(rgba[0], rgba[1], rgba[2]))
                .name(format!("{}: {:.1}%", label, pct))
        })
        .collect();

    let labels: Vec<String> = ranked.iter().map(|(label, _)| label.to_string()).collect();
    let y_axis = AxisHints::new(Axis::Y).formatter(move |mark, _range| {
        let idx = mark.value.round();
        if idx >= 0.0 && (mark.value - idx).abs() < 0.01 {
            labels.get(idx as usize).cloned().unwrap_or_default()
        } else {
            String::new()
        }
    });

    let x_axis = AxisHints::new(Axis::X)
        .label(UI_TEXT.imp_x_axis.clone())
        .placement(VPlacement::Bottom);

    Plot::new("feature_importance")
        .height(220.0)
        .custom_x_axes(vec![x_axis])
        .custom_y_axes(vec![y_axis])
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("importance", bars).horizontal());
        });
}

fn render_interpretation(ui: &mut Ui) {
    ui.add_space(6.0);
    for (term, text) in UI_TEXT.imp_interpretation {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(format!("• {}:", term)).strong());
            ui.label(*text);
        });
    }
}

#[cfg(test)]
mod tests {
    use colorgrad::Gradient;

    use super::IMPORTANCE_GRADIENT;

    #[test]
    fn importance_gradient_spans_the_blue_ramp() {
        let light = IMPORTANCE_GRADIENT.at(0.0).to_rgba8();
        let dark = IMPORTANCE_GRADIENT.at(1.0).to_rgba8();
        assert_eq!(light, [0xc6, 0xdb, 0xef, 0xff]);
        assert_eq!(dark, [0x08, 0x30, 0x6b, 0xff]);
    }
}
