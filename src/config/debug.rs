//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log each asset as it is read at startup (sizes, durations).
    pub log_asset_load: bool,

    /// Log every prediction request and its resulting feature row.
    pub log_predictions: bool,

    /// Log duplicate postal prefixes found while building the geo table.
    pub log_duplicate_prefixes: bool,

    /// Log tab switches and form submissions.
    pub log_ui_interactions: bool,
}

pub const DF: LogFlags = LogFlags {
    log_asset_load: true,
    log_predictions: false,
    log_duplicate_prefixes: false,
    log_ui_interactions: false,
};
