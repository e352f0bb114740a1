//! The request/response pipeline behind the simulator tab.
//!
//! Stateless: each submission resolves both postal codes, computes the
//! great-circle distance, assembles the feature row and asks the model for
//! a day estimate. Nothing is cached between submissions.

use std::fmt;

use crate::config::SIMULATOR;
use crate::data::GeoTable;
use crate::domain::{ShipmentFeatures, ShipmentInput, haversine};
use crate::model::DeliveryModel;

#[cfg(debug_assertions)]
use crate::config::DF;

/// Result of one simulation, ready for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub distance_km: f64,
    pub predicted_days: f64,
    /// The conservative figure the legacy system would have promised.
    pub legacy_days: f64,
}

/// User-facing failure taxonomy. None of these reach the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    UnknownOrigin(String),
    UnknownDestination(String),
    ModelUnavailable,
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOrigin(code) => {
                write!(f, "Origin postal code '{}' not found in the reference base", code)
            }
            Self::UnknownDestination(code) => {
                write!(
                    f,
                    "Destination postal code '{}' not found in the reference base",
                    code
                )
            }
            Self::ModelUnavailable => {
                write!(f, "Prediction model is not loaded. Check the asset files")
            }
        }
    }
}

impl std::error::Error for EstimateError {}

/// Borrows the loaded assets for the duration of one submission.
pub struct Estimator<'a> {
    geo: &'a GeoTable,
    model: &'a dyn DeliveryModel,
}

impl<'a> Estimator<'a> {
    pub fn new(geo: &'a GeoTable, model: &'a dyn DeliveryModel) -> Self {
        Self { geo, model }
    }

    pub fn estimate(&self, input: &ShipmentInput) -> Result<Estimate, EstimateError> {
        let origin = self
            .geo
            .lookup(&input.origin_code)
            .ok_or_else(|| EstimateError::UnknownOrigin(input.origin_code.clone()))?;
        let destination = self
            .geo
            .lookup(&input.destination_code)
            .ok_or_else(|| EstimateError::UnknownDestination(input.destination_code.clone()))?;

        let distance_km = haversine(origin, destination);

        let features = ShipmentFeatures {
            distance_km,
            weight_g: input.weight_g,
            volume_cm3: input.volume_cm3,
            freight_value: input.freight_value,
            price: input.price,
        };

        #[cfg(debug_assertions)]
        if DF.log_predictions {
            log::info!(
                "Estimating {} -> {}: {:?}",
                input.origin_code,
                input.destination_code,
                features
            );
        }

        let predicted_days = self.model.predict(&features);

        Ok(Estimate {
            distance_km,
            predicted_days,
            legacy_days: predicted_days + SIMULATOR.legacy_margin_days,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::{Estimate, EstimateError, Estimator};
    use crate::data::GeoTable;
    use crate::domain::{ShipmentFeatures, ShipmentInput};
    use crate::model::DeliveryModel;

    const GEO_CSV: &str = "\
geolocation_zip_code_prefix,geolocation_lat,geolocation_lng
13023,-22.90,-47.06
42800,-12.96,-38.47
";

    /// Counts invocations so tests can assert the model was never reached.
    struct SpyModel {
        calls: Cell<usize>,
        fixed_days: f64,
    }

    impl SpyModel {
        fn new(fixed_days: f64) -> Self {
            Self { calls: Cell::new(0), fixed_days }
        }
    }

    impl DeliveryModel for SpyModel {
        fn predict(&self, _features: &ShipmentFeatures) -> f64 {
            self.calls.set(self.calls.get() + 1);
            self.fixed_days
        }

        fn feature_importances(&self) -> &[f64] {
            &[0.2; ShipmentFeatures::COUNT]
        }
    }

    fn input(origin: &str, destination: &str) -> ShipmentInput {
        ShipmentInput {
            origin_code: origin.to_string(),
            destination_code: destination.to_string(),
            weight_g: 225.0,
            volume_cm3: 2000.0,
            freight_value: 20.0,
            price: 100.0,
        }
    }

    #[test]
    fn end_to_end_estimate() {
        let geo = GeoTable::from_reader(GEO_CSV.as_bytes()).unwrap();
        let model = SpyModel::new(9.5);
        let estimator = Estimator::new(&geo, &model);

        let estimate = estimator.estimate(&input("13023", "42800")).unwrap();
        assert!(estimate.distance_km > 0.0);
        assert_eq!(estimate.predicted_days, 9.5);
        assert_eq!(estimate.legacy_days, 9.5 + 7.0);
        assert_eq!(model.calls.get(), 1);
    }

    #[test]
    fn identical_inputs_identical_output() {
        let geo = GeoTable::from_reader(GEO_CSV.as_bytes()).unwrap();
        let model = SpyModel::new(4.2);
        let estimator = Estimator::new(&geo, &model);

        let request = input("13023-000", "42800");
        let first = estimator.estimate(&request).unwrap();
        let second = estimator.estimate(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_origin_never_reaches_model() {
        let geo = GeoTable::from_reader(GEO_CSV.as_bytes()).unwrap();
        let model = SpyModel::new(1.0);
        let estimator = Estimator::new(&geo, &model);

        let err = estimator.estimate(&input("00000", "42800")).unwrap_err();
        assert_eq!(err, EstimateError::UnknownOrigin("00000".to_string()));
        assert_eq!(model.calls.get(), 0);
    }

    #[test]
    fn unknown_destination_never_reaches_model() {
        let geo = GeoTable::from_reader(GEO_CSV.as_bytes()).unwrap();
        let model = SpyModel::new(1.0);
        let estimator = Estimator::new(&geo, &model);

        let err = estimator.estimate(&input("13023", "00000")).unwrap_err();
        assert_eq!(err, EstimateError::UnknownDestination("00000".to_string()));
        assert_eq!(model.calls.get(), 0);
    }

    #[test]
    fn negative_predictions_are_not_clamped() {
        let geo = GeoTable::from_reader(GEO_CSV.as_bytes()).unwrap();
        let model = SpyModel::new(-2.0);
        let estimator = Estimator::new(&geo, &model);

        let Estimate { predicted_days, legacy_days, .. } =
            estimator.estimate(&input("13023", "42800")).unwrap();
        assert_eq!(predicted_days, -2.0);
        assert_eq!(legacy_days, 5.0);
    }
}
