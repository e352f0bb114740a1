mod performance;
mod roadmap;
mod simulator;

pub(crate) use performance::PerformancePanel;
pub(crate) use roadmap::RoadmapPanel;
pub(crate) use simulator::{SimulatorEvent, SimulatorForm, SimulatorPanel};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The three dashboard tabs, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum DashboardTab {
    #[default]
    #[strum(to_string = "📈 Model performance")]
    Performance,
    #[strum(to_string = "🧮 Delivery simulator")]
    Simulator,
    #[strum(to_string = "🚀 Impact & roadmap")]
    Roadmap,
}
