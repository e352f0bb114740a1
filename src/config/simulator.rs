//! Simulator defaults and chart parameters.

/// Default form values and the legacy comparison margin.
///
/// The defaults mirror a typical marketplace parcel: a light package on the
/// Campinas -> Bahia lane.
pub struct SimulatorConfig {
    pub default_origin: &'static str,
    pub default_destination: &'static str,
    pub default_weight_g: f64,
    pub default_volume_cm3: f64,
    pub default_freight_value: f64,
    pub default_price: f64,
    /// Safety margin the legacy estimator adds on top of the model figure
    pub legacy_margin_days: f64,
    /// Leading digits of a postal code used as the geographic bucket
    pub prefix_len: usize,
}

pub const SIMULATOR: SimulatorConfig = SimulatorConfig {
    default_origin: "13023",
    default_destination: "42800",
    default_weight_g: 225.0,
    default_volume_cm3: 2000.0,
    default_freight_value: 20.0,
    default_price: 100.0,
    legacy_margin_days: 7.0,
    prefix_len: 5,
};

/// Error-distribution histogram layout (days of error on the x axis)
pub struct HistogramConfig {
    pub min_days: f64,
    pub max_days: f64,
    pub bin_count: usize,
}

pub const HISTOGRAM: HistogramConfig = HistogramConfig {
    min_days: -20.0,
    max_days: 20.0,
    bin_count: 100,
};

impl HistogramConfig {
    pub fn bin_width(&self) -> f64 {
        (self.max_days - self.min_days) / self.bin_count as f64
    }
}
