use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, RichText, TopBottomPanel, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{mem, sync::mpsc::Receiver},
    strum::IntoEnumIterator,
};

use crate::{
    Cli,
    app::state::{AppState, LoadingState},
    data::{AssetBundle, AssetEvent, spawn_asset_loader},
    domain::ShipmentInput,
    estimator::{Estimate, EstimateError, Estimator},
    model::DeliveryModel,
    ui::{
        UI_CONFIG, UI_TEXT, render_loading,
        tabs::{DashboardTab, PerformancePanel, RoadmapPanel, SimulatorEvent, SimulatorForm, SimulatorPanel},
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) selected_tab: DashboardTab,
    pub(crate) form: SimulatorForm,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    bundle: Option<AssetBundle>,
    #[serde(skip)]
    bundle_rx: Option<Receiver<AssetBundle>>,
    #[serde(skip)]
    event_rx: Option<Receiver<AssetEvent>>,
    #[serde(skip)]
    last_outcome: Option<Result<Estimate, EstimateError>>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            selected_tab: DashboardTab::default(),
            form: SimulatorForm::default(),
            state: AppState::default(),
            bundle: None,
            bundle_rx: None,
            event_rx: None,
            last_outcome: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.state = AppState::Loading(LoadingState::default());

        let (bundle_rx, event_rx) = spawn_asset_loader(args.data_dir);
        app.bundle_rx = Some(bundle_rx);
        app.event_rx = Some(event_rx);

        app
    }

    fn tick_loading_state(&mut self, ctx: &Context, state: &mut LoadingState) -> AppState {
        if let Some(rx) = &self.event_rx {
            while let Ok(event) = rx.try_recv() {
                state.apply(event);
            }
        }

        if let Some(rx) = &self.bundle_rx {
            if let Ok(bundle) = rx.try_recv() {
                if !bundle.prediction_ready() {
                    log::warn!("Starting with prediction disabled: core assets missing");
                }
                self.bundle = Some(bundle);
                return AppState::Running;
            }
        }

        render_loading(ctx, state);
        ctx.request_repaint();
        AppState::Loading(state.clone())
    }

    fn tick_running_state(&mut self, ctx: &Context) {
        self.render_top_panel(ctx);
        self.render_central_panel(ctx);
    }

    fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(&UI_TEXT.app_title)
                            .color(UI_CONFIG.colors.heading)
                            .strong(),
                    );
                });
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    for tab in DashboardTab::iter() {
                        let selected = self.selected_tab == tab;
                        if ui.selectable_label(selected, tab.to_string()).clicked() && !selected {
                            #[cfg(debug_assertions)]
                            if DF.log_ui_interactions {
                                log::info!("Tab switched to {}", tab);
                            }
                            self.selected_tab = tab;
                        }
                    }
                });
            });
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        let events = CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                let mut events = Vec::new();
                eframe::egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.selected_tab {
                        DashboardTab::Performance => {
                            let comparison =
                                self.bundle.as_ref().and_then(|b| b.comparison.as_ref());
                            let model = self
                                .bundle
                                .as_ref()
                                .and_then(|b| b.model.as_ref())
                                .map(|m| m as &dyn DeliveryModel);
                            PerformancePanel::new(comparison, model).render(ui);
                        }
                        DashboardTab::Simulator => {
                            let prediction_ready =
                                self.bundle.as_ref().is_some_and(|b| b.prediction_ready());
                            let mut panel = SimulatorPanel::new(
                                &mut self.form,
                                self.last_outcome.as_ref(),
                                prediction_ready,
                            );
                            events = panel.render(ui);
                        }
                        DashboardTab::Roadmap => RoadmapPanel::render(ui),
                    });
                events
            })
            .inner;

        for event in events {
            match event {
                SimulatorEvent::Submitted(input) => self.handle_submission(input),
            }
        }
    }

    fn handle_submission(&mut self, input: ShipmentInput) {
        let Some(bundle) = &self.bundle else {
            self.last_outcome = Some(Err(EstimateError::ModelUnavailable));
            return;
        };

        self.last_outcome = Some(match (&bundle.geo, &bundle.model) {
            (Some(geo), Some(model)) => Estimator::new(geo, model).estimate(&input),
            _ => Err(EstimateError::ModelUnavailable),
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading(mut s) => self.tick_loading_state(ctx, &mut s),
            AppState::Running => {
                self.tick_running_state(ctx);
                AppState::Running
            }
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.top_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}
