//! Startup asset loading.
//!
//! All three assets are read once on a background thread so the first frame
//! can paint immediately; results arrive over mpsc channels. There is no
//! refresh: whatever loads here is held for the process lifetime.

use std::{
    path::{Path, PathBuf},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use crate::config::ASSETS;
use crate::data::{ComparisonTable, GeoTable};
use crate::model::GradientBoostedModel;

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AssetName {
    Model,
    GeoTable,
    Comparison,
}

impl AssetName {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Model => ASSETS.model_file,
            Self::GeoTable => ASSETS.geo_file,
            Self::Comparison => ASSETS.comparison_file,
        }
    }

    pub const ALL: [AssetName; 3] = [Self::Model, Self::GeoTable, Self::Comparison];
}

#[derive(Debug, Clone)]
pub enum AssetStatus {
    Pending,
    Loading,
    /// Loaded, with a row/tree count for the status grid.
    Loaded(usize),
    Failed(String),
    /// Missing but tolerated (comparison file only).
    Skipped,
}

#[derive(Debug, Clone)]
pub struct AssetEvent {
    pub name: AssetName,
    pub status: AssetStatus,
}

/// Everything the running app works with. Model and geo table being absent
/// disables prediction; the comparison table being absent only downgrades
/// the performance tab.
pub struct AssetBundle {
    pub model: Option<GradientBoostedModel>,
    pub geo: Option<GeoTable>,
    pub comparison: Option<ComparisonTable>,
}

impl AssetBundle {
    pub fn prediction_ready(&self) -> bool {
        self.model.is_some() && self.geo.is_some()
    }
}

/// Spawn the loader thread. The first channel delivers the bundle once;
/// the second streams per-asset progress for the loading screen.
pub fn spawn_asset_loader(data_dir: PathBuf) -> (Receiver<AssetBundle>, Receiver<AssetEvent>) {
    let (bundle_tx, bundle_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();

    thread::spawn(move || {
        let bundle = load_assets(&data_dir, &event_tx);
        let _ = bundle_tx.send(bundle);
    });

    (bundle_rx, event_rx)
}

fn load_assets(dir: &Path, events: &Sender<AssetEvent>) -> AssetBundle {
    let send = |name, status| {
        let _ = events.send(AssetEvent { name, status });
    };

    send(AssetName::Model, AssetStatus::Loading);
    let model = match GradientBoostedModel::load(&dir.join(ASSETS.model_file)) {
        Ok(model) => {
            #[cfg(debug_assertions)]
            if DF.log_asset_load {
                log::info!("Loaded model with {} trees", model.tree_count());
            }
            send(AssetName::Model, AssetStatus::Loaded(model.tree_count()));
            Some(model)
        }
        Err(err) => {
            log::error!("Model load failed: {:#}", err);
            send(AssetName::Model, AssetStatus::Failed(format!("{:#}", err)));
            None
        }
    };

    send(AssetName::GeoTable, AssetStatus::Loading);
    let geo = match GeoTable::load(&dir.join(ASSETS.geo_file)) {
        Ok(table) => {
            #[cfg(debug_assertions)]
            if DF.log_asset_load {
                log::info!("Loaded geo table with {} prefixes", table.len());
            }
            send(AssetName::GeoTable, AssetStatus::Loaded(table.len()));
            Some(table)
        }
        Err(err) => {
            log::error!("Geo table load failed: {:#}", err);
            send(AssetName::GeoTable, AssetStatus::Failed(format!("{:#}", err)));
            None
        }
    };

    // Soft asset: the first run has no comparison export yet.
    send(AssetName::Comparison, AssetStatus::Loading);
    let comparison_path = dir.join(ASSETS.comparison_file);
    let comparison = if comparison_path.exists() {
        match ComparisonTable::load(&comparison_path) {
            Ok(table) => {
                send(AssetName::Comparison, AssetStatus::Loaded(table.len()));
                Some(table)
            }
            Err(err) => {
                log::warn!("Comparison file unreadable: {:#}", err);
                send(AssetName::Comparison, AssetStatus::Failed(format!("{:#}", err)));
                None
            }
        }
    } else {
        log::info!("No comparison file at {}", comparison_path.display());
        send(AssetName::Comparison, AssetStatus::Skipped);
        None
    };

    AssetBundle { model, geo, comparison }
}
