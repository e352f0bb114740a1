mod comparison;
mod geo_table;
mod loader;

pub use comparison::{ComparisonStats, ComparisonTable, bin_center, bin_errors};
pub use geo_table::{GeoTable, normalize_prefix};
pub use loader::{AssetBundle, AssetEvent, AssetName, AssetStatus, spawn_asset_loader};
