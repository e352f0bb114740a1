use eframe::egui::{Button, DragValue, RichText, TextEdit, Ui};
use serde::{Deserialize, Serialize};

use crate::config::SIMULATOR;
use crate::domain::ShipmentInput;
use crate::estimator::{Estimate, EstimateError};
use crate::ui::utils::{format_days, format_km, section_heading, subsection_heading};
use crate::ui::{UI_CONFIG, UI_TEXT, metric};

/// Form state for the simulator tab. Persisted across sessions so a user
/// returning to the dashboard finds their last route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SimulatorForm {
    pub origin_code: String,
    pub destination_code: String,
    pub weight_g: f64,
    pub volume_cm3: f64,
    pub freight_value: f64,
    pub price: f64,
}

impl Default for SimulatorForm {
    fn default() -> Self {
        Self {
            origin_code: SIMULATOR.default_origin.to_string(),
            destination_code: SIMULATOR.default_destination.to_string(),
            weight_g: SIMULATOR.default_weight_g,
            volume_cm3: SIMULATOR.default_volume_cm3,
            freight_value: SIMULATOR.default_freight_value,
            price: SIMULATOR.default_price,
        }
    }
}

impl SimulatorForm {
    pub fn to_input(&self) -> ShipmentInput {
        ShipmentInput {
            origin_code: self.origin_code.clone(),
            destination_code: self.destination_code.clone(),
            weight_g: self.weight_g,
            volume_cm3: self.volume_cm3,
            freight_value: self.freight_value,
            price: self.price,
        }
    }
}

#[derive(Debug)]
pub(crate) enum SimulatorEvent {
    Submitted(ShipmentInput),
}

/// Simulator tab: three-column input form, a submit action, and either the
/// result metrics or a user-facing error line.
pub(crate) struct SimulatorPanel<'a> {
    form: &'a mut SimulatorForm,
    outcome: Option<&'a Result<Estimate, EstimateError>>,
    prediction_ready: bool,
}

impl<'a> SimulatorPanel<'a> {
    pub fn new(
        form: &'a mut SimulatorForm,
        outcome: Option<&'a Result<Estimate, EstimateError>>,
        prediction_ready: bool,
    ) -> Self {
        Self { form, outcome, prediction_ready }
    }

    pub fn render(&mut self, ui: &mut Ui) -> Vec<SimulatorEvent> {
        let mut events = Vec::new();

        section_heading(ui, &UI_TEXT.sim_heading);
        ui.label(
            RichText::new(&UI_TEXT.sim_caption)
                .small()
                .color(UI_CONFIG.colors.label),
        );
        ui.add_space(10.0);

        self.render_form(ui);
        ui.add_space(14.0);

        let submit = ui.add_enabled(
            self.prediction_ready,
            Button::new(RichText::new(&UI_TEXT.sim_submit).strong()).min_size([220.0, 32.0].into()),
        );
        if submit.clicked() {
            events.push(SimulatorEvent::Submitted(self.form.to_input()));
        }
        if !self.prediction_ready {
            ui.label(RichText::new(&UI_TEXT.sim_disabled).color(UI_CONFIG.colors.error));
        }

        ui.add_space(14.0);
        self.render_outcome(ui);

        events
    }

    fn render_form(&mut self, ui: &mut Ui) {
        ui.columns(3, |cols| {
            subsection_heading(&mut cols[0], &UI_TEXT.sim_group_route);
            cols[0].label(&UI_TEXT.sim_label_origin);
            cols[0].add(TextEdit::singleline(&mut self.form.origin_code).desired_width(120.0));
            cols[0].label(&UI_TEXT.sim_label_destination);
            cols[0].add(TextEdit::singleline(&mut self.form.destination_code).desired_width(120.0));

            subsection_heading(&mut cols[1], &UI_TEXT.sim_group_package);
            cols[1].label(&UI_TEXT.sim_label_weight);
            cols[1].add(DragValue::new(&mut self.form.weight_g).speed(5.0).range(0.0..=f64::MAX));
            cols[1]
                .label(&UI_TEXT.sim_label_volume)
                .on_hover_text(&UI_TEXT.sim_hint_volume);
            cols[1].add(DragValue::new(&mut self.form.volume_cm3).speed(50.0).range(0.0..=f64::MAX));

            subsection_heading(&mut cols[2], &UI_TEXT.sim_group_financial);
            cols[2].label(&UI_TEXT.sim_label_freight);
            cols[2].add(
                DragValue::new(&mut self.form.freight_value)
                    .speed(0.5)
                    .range(0.0..=f64::MAX)
                    .prefix("R$ "),
            );
            cols[2].label(&UI_TEXT.sim_label_price);
            cols[2].add(
                DragValue::new(&mut self.form.price)
                    .speed(1.0)
                    .range(0.0..=f64::MAX)
                    .prefix("R$ "),
            );
        });
    }

    fn render_outcome(&self, ui: &mut Ui) {
        let Some(outcome) = self.outcome else { return };

        match outcome {
            Ok(estimate) => {
                ui.label(RichText::new(&UI_TEXT.sim_success).color(UI_CONFIG.colors.model_series));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    metric(
                        ui,
                        &UI_TEXT.sim_metric_distance,
                        &format_km(estimate.distance_km),
                        None,
                    );
                    ui.add_space(40.0);
                    metric(
                        ui,
                        &UI_TEXT.sim_metric_predicted,
                        &format_days(estimate.predicted_days),
                        None,
                    );
                    ui.add_space(40.0);
                    metric(
                        ui,
                        &UI_TEXT.sim_metric_legacy,
                        &format!("{:.0} days", estimate.legacy_days),
                        Some((&UI_TEXT.sim_legacy_delta, UI_CONFIG.colors.legacy_series)),
                    );
                });
            }
            Err(err) => {
                ui.label(RichText::new(err.to_string()).color(UI_CONFIG.colors.error));
            }
        }
    }
}
