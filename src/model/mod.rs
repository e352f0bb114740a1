mod regressor;

pub use regressor::{DeliveryModel, GradientBoostedModel};
