use std::sync::LazyLock;

pub struct UiText {
    pub app_title: String,

    // --- Loading screen ---
    pub ls_title: String,
    pub ls_subtitle: String,
    pub ls_failed: String,
    pub ls_skipped: String,
    pub ls_loading: String,

    // --- Performance tab ---
    pub perf_heading: String,
    pub hist_heading: String,
    pub hist_caption: String,
    pub hist_x_axis: String,
    pub hist_series_legacy: String,
    pub hist_series_model: String,
    pub kpi_legacy_mae: String,
    pub kpi_model_mae: String,
    pub kpi_sample: String,
    pub kpi_better_suffix: String,
    pub warn_no_comparison: String,
    pub imp_heading: String,
    pub imp_caption: String,
    pub imp_x_axis: String,
    pub warn_no_model: String,
    pub imp_interpretation: &'static [(&'static str, &'static str)],

    // --- Simulator tab ---
    pub sim_heading: String,
    pub sim_caption: String,
    pub sim_group_route: String,
    pub sim_group_package: String,
    pub sim_group_financial: String,
    pub sim_label_origin: String,
    pub sim_label_destination: String,
    pub sim_label_weight: String,
    pub sim_label_volume: String,
    pub sim_label_freight: String,
    pub sim_label_price: String,
    pub sim_hint_volume: String,
    pub sim_submit: String,
    pub sim_success: String,
    pub sim_metric_distance: String,
    pub sim_metric_predicted: String,
    pub sim_metric_legacy: String,
    pub sim_legacy_delta: String,
    pub sim_disabled: String,

    // --- Roadmap tab ---
    pub rm_heading: String,
    pub rm_caption: String,
    pub rm_business_heading: String,
    pub rm_business_caption: String,
    pub rm_tech_heading: String,
    pub rm_tech_caption: String,
    pub rm_business_cards: &'static [(&'static str, &'static str, &'static str)],
    pub rm_tech_cards: &'static [(&'static str, &'static str, &'static str)],
    pub rm_conclusion: String,
}

/// Global UI text instance
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "🚚 Sonda Delivery: Logistics Optimization with ML".into(),

    ls_title: "Sonda Delivery".into(),
    ls_subtitle: "Loading model and reference data...".into(),
    ls_failed: "failed".into(),
    ls_skipped: "not present (charts disabled)".into(),
    ls_loading: "loading".into(),

    perf_heading: "Performance & Explainability".into(),
    hist_heading: "📉 Error distribution (Legacy vs ML)".into(),
    hist_caption: "How many days each system misses by. Ideally the bars sit tall and centered on 0."
        .into(),
    hist_x_axis: "Days of error".into(),
    hist_series_legacy: "Legacy error".into(),
    hist_series_model: "ML error".into(),
    kpi_legacy_mae: "Mean error (Legacy)".into(),
    kpi_model_mae: "Mean error (ML)".into(),
    kpi_sample: "Orders analyzed".into(),
    kpi_better_suffix: "% better".into(),
    warn_no_comparison: "⚠ Comparison file not found. Run the evaluation export to see this chart."
        .into(),
    imp_heading: "🧠 Why did the model decide this?".into(),
    imp_caption: "Which variables carry the most weight in the delivery-time estimate.".into(),
    imp_x_axis: "Importance (%)".into(),
    warn_no_model: "⚠ Model not loaded. Feature importances unavailable.".into(),
    imp_interpretation: &[
        ("Distance", "usually factor #1. Physics still applies."),
        (
            "Freight value",
            "expensive freight tends to mean an express carrier, which shortens the promise.",
        ),
    ],

    sim_heading: "Real-time delivery simulation".into(),
    sim_caption: "Fill in the route details to estimate the delivery window with the ML model."
        .into(),
    sim_group_route: "📍 Route".into(),
    sim_group_package: "📦 Package".into(),
    sim_group_financial: "💰 Financial".into(),
    sim_label_origin: "Origin postal code (seller)".into(),
    sim_label_destination: "Destination postal code (customer)".into(),
    sim_label_weight: "Weight (grams)".into(),
    sim_label_volume: "Volume (cm³)".into(),
    sim_label_freight: "Freight value (R$)".into(),
    sim_label_price: "Product price (R$)".into(),
    sim_hint_volume: "Height x width x length".into(),
    sim_submit: "🚀 Estimate delivery time".into(),
    sim_success: "Estimate computed.".into(),
    sim_metric_distance: "Flight distance".into(),
    sim_metric_predicted: "Estimated time (ML)".into(),
    sim_metric_legacy: "Conservative time (Legacy)".into(),
    sim_legacy_delta: "-7 days".into(),
    sim_disabled: "Prediction unavailable: model or geo reference failed to load.".into(),

    rm_heading: "Strategic view: next steps".into(),
    rm_caption: "The current model is only the start. Expected value and the technical roadmap below."
        .into(),
    rm_business_heading: "🎯 Direct impact expectations".into(),
    rm_business_caption: "Financial and operational benefits".into(),
    rm_tech_heading: "🛠 Planned technical improvements".into(),
    rm_tech_caption: "Model evolution roadmap".into(),
    rm_business_cards: &[
        (
            "✅",
            "No more padding",
            "Accurate estimates remove the need for safety days. The promised window is the real window.",
        ),
        (
            "🤝",
            "Higher trust",
            "Customers get a realistic date. Hitting an exact promise builds more loyalty than overshooting a vague one.",
        ),
        (
            "🛒",
            "Less abandonment",
            "For nearby regions the model shortens the promised window, converting customers who would walk away from long quotes.",
        ),
        (
            "🚚",
            "Competitiveness",
            "The freight offer becomes more attractive against competitors without raising operating cost.",
        ),
    ],
    rm_tech_cards: &[
        (
            "🌊",
            "Seasonality",
            "Add temporal variables (Black Friday, Christmas) to predict bottlenecks on critical dates.",
        ),
        (
            "🗺",
            "Per-prefix granularity",
            "Use per-region volume data to flag areas with recurring delivery risk.",
        ),
        (
            "🤖",
            "Stronger models",
            "Evaluate boosted alternatives and real-time traffic data in the feature set.",
        ),
        (
            "🔄",
            "MLOps monitoring",
            "Monthly automated retraining to track changes in the logistics network.",
        ),
    ],
    rm_conclusion: "Conclusion: shipping this model is a paradigm shift in the buying experience."
        .into(),
});
