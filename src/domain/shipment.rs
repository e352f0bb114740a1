use serde::{Deserialize, Serialize};

/// Raw form input for one simulation. Created per submission, discarded
/// after the estimate is displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentInput {
    pub origin_code: String,
    pub destination_code: String,
    pub weight_g: f64,
    pub volume_cm3: f64,
    pub freight_value: f64,
    pub price: f64,
}

/// The model's input schema, as named fields.
///
/// The training pipeline fixed the column order as
/// `[distance_km, weight_g, volume_cm3, freight_value, price]`. That order
/// is defined in exactly one place: [`ShipmentFeatures::as_row`]. Model
/// artifacts declare their own feature names and are rejected at load time
/// if they disagree with [`ShipmentFeatures::LABELS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipmentFeatures {
    pub distance_km: f64,
    pub weight_g: f64,
    pub volume_cm3: f64,
    pub freight_value: f64,
    pub price: f64,
}

impl ShipmentFeatures {
    pub const COUNT: usize = 5;

    /// Training column names, in model order.
    pub const LABELS: [&'static str; Self::COUNT] = [
        "distancia_km",
        "product_weight_g",
        "volume_cm3",
        "freight_value",
        "price",
    ];

    /// Human-readable labels for the importance chart, same order.
    pub const DISPLAY_LABELS: [&'static str; Self::COUNT] = [
        "Distance (km)",
        "Weight (g)",
        "Volume (cm³)",
        "Freight value (R$)",
        "Product price (R$)",
    ];

    /// Emit the fields in model order.
    pub fn as_row(&self) -> [f64; Self::COUNT] {
        [
            self.distance_km,
            self.weight_g,
            self.volume_cm3,
            self.freight_value,
            self.price,
        ]
    }
}
