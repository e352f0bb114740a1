//! Configuration module for the sonda-dash application.

mod assets;
mod debug;
mod simulator;

pub use assets::ASSETS;
pub use debug::DF;
pub use simulator::{HISTOGRAM, SIMULATOR};
