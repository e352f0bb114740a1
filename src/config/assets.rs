//! Asset file locations and state persistence configuration.

/// Configuration for the data artifacts loaded at startup
pub struct AssetPathsConfig {
    /// Serialized regression model exported by the training notebook
    pub model_file: &'static str,
    /// Postal-prefix to coordinate reference table
    pub geo_file: &'static str,
    /// Historical actual-vs-estimated comparison (optional, chart only)
    pub comparison_file: &'static str,
    /// Path for saving/loading application UI state (eframe writes RON)
    pub state_path: &'static str,
}

pub const ASSETS: AssetPathsConfig = AssetPathsConfig {
    model_file: "modelo_entregas.json",
    geo_file: "referencia_geo.csv",
    comparison_file: "comparativo_modelo.csv",
    state_path: ".sonda_state.ron",
};

#[cfg(test)]
mod tests {
    use super::ASSETS;

    #[test]
    fn state_file_extension_matches_persistence_format() {
        assert!(ASSETS.state_path.ends_with(".ron"));
    }
}
