use std::collections::BTreeMap;

use crate::data::{AssetEvent, AssetName, AssetStatus};

pub(crate) enum AppState {
    Loading(LoadingState),
    Running,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState::default())
    }
}

/// Per-asset progress while the loader thread works.
#[derive(Default, Clone)]
pub struct LoadingState {
    statuses: BTreeMap<AssetName, AssetStatus>,
}

impl LoadingState {
    pub(crate) fn apply(&mut self, event: AssetEvent) {
        self.statuses.insert(event.name, event.status);
    }

    pub(crate) fn status_of(&self, name: AssetName) -> AssetStatus {
        self.statuses.get(&name).cloned().unwrap_or(AssetStatus::Pending)
    }

    /// Assets that have finished, one way or another.
    pub(crate) fn settled_count(&self) -> usize {
        self.statuses
            .values()
            .filter(|s| {
                matches!(
                    s,
                    AssetStatus::Loaded(_) | AssetStatus::Failed(_) | AssetStatus::Skipped
                )
            })
            .count()
    }
}
