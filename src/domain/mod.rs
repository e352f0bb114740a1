mod geo;
mod shipment;

pub use geo::{GeoPoint, haversine};
pub use shipment::{ShipmentFeatures, ShipmentInput};
