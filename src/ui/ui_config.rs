use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub top_panel: Color32,
    /// Legacy estimator series in charts and deltas
    pub legacy_series: Color32,
    /// Model series in charts and deltas
    pub model_series: Color32,
    pub warning: Color32,
    pub error: Color32,
    /// Business-impact roadmap cards
    pub card_business: Color32,
    /// Technical roadmap cards
    pub card_tech: Color32,
    pub card_text: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(25, 25, 30),
        top_panel: Color32::from_rgb(18, 18, 22),
        legacy_series: Color32::from_rgb(255, 75, 75),
        model_series: Color32::from_rgb(0, 204, 150),
        warning: Color32::from_rgb(255, 196, 0),
        error: Color32::from_rgb(255, 85, 85),
        card_business: Color32::from_rgb(46, 125, 50),
        card_tech: Color32::from_rgb(21, 101, 192),
        card_text: Color32::from_rgb(240, 240, 240),
    },
};

impl UiConfig {
    /// Frame for the top toolbar (title + tab strip)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.top_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the tab content area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Filled frame for a roadmap card
    pub fn card_frame(&self, fill: Color32) -> Frame {
        Frame {
            fill,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(14),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }
}
