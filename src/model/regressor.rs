//! Pre-trained regression model loading and inference.
//!
//! The training notebook exports the fitted ensemble as a JSON artifact:
//! a base score, a forest of regression trees stored as flat node arrays,
//! the per-feature importances, and the training column names. Prediction
//! walks every tree and accumulates its leaf value onto the base score:
//!
//! ```text
//! days = base_score + Σ tree_k(features)
//! ```

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::domain::ShipmentFeatures;

/// The injected prediction collaborator.
///
/// The dashboard only ever needs a scalar day estimate and the importance
/// vector; everything else about the model is opaque.
pub trait DeliveryModel {
    /// Predicted delivery time in days. Deterministic for fixed input.
    fn predict(&self, features: &ShipmentFeatures) -> f64;

    /// Relative weight of each feature, aligned with
    /// [`ShipmentFeatures::LABELS`]. Values sum to roughly 1.
    fn feature_importances(&self) -> &[f64];
}

/// One node of a flattened regression tree. Leaves carry `value`; internal
/// nodes carry a split and child indexes into the same array.
#[derive(Debug, Deserialize)]
struct TreeNode {
    feature: usize,
    threshold: f64,
    left: usize,
    right: usize,
    value: f64,
    is_leaf: bool,
}

#[derive(Debug, Deserialize)]
struct RegressionTree {
    nodes: Vec<TreeNode>,
}

impl RegressionTree {
    /// A tree is walkable when every split stays inside the node array,
    /// uses a feature the schema defines, and points both children
    /// strictly past itself so traversal always advances and terminates.
    fn validate(&self, tree_idx: usize) -> Result<()> {
        if self.nodes.is_empty() {
            bail!("Model artifact tree {} has no nodes", tree_idx);
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            if node.is_leaf {
                continue;
            }
            if node.feature >= ShipmentFeatures::COUNT {
                bail!(
                    "Model artifact tree {} node {} splits on feature {}, schema has {}",
                    tree_idx,
                    idx,
                    node.feature,
                    ShipmentFeatures::COUNT
                );
            }
            if node.left >= self.nodes.len() || node.right >= self.nodes.len() {
                bail!(
                    "Model artifact tree {} node {} has a child index outside its {} nodes",
                    tree_idx,
                    idx,
                    self.nodes.len()
                );
            }
            if node.left <= idx || node.right <= idx {
                bail!(
                    "Model artifact tree {} node {} has a non-advancing child index",
                    tree_idx,
                    idx
                );
            }
        }
        Ok(())
    }

    fn evaluate(&self, row: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            let node = &self.nodes[idx];
            if node.is_leaf {
                return node.value;
            }
            idx = if row[node.feature] <= node.threshold {
                node.left
            } else {
                node.right
            };
        }
    }
}

/// A gradient-boosted regression ensemble deserialized from the training
/// export. Immutable once loaded.
#[derive(Debug, Deserialize)]
pub struct GradientBoostedModel {
    base_score: f64,
    trees: Vec<RegressionTree>,
    feature_importances: Vec<f64>,
    feature_names: Vec<String>,
}

impl GradientBoostedModel {
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open model artifact {}", path.display()))?;
        let model: Self = serde_json::from_reader(std::io::BufReader::new(file))
            .context("Failed to parse model artifact")?;
        model.validate_schema()?;
        Ok(model)
    }

    /// Reject artifacts whose schema disagrees with the dashboard's feature
    /// struct, or whose trees cannot be walked safely. A corrupt export
    /// must fail loudly here, not panic mid-session inside `predict`.
    fn validate_schema(&self) -> Result<()> {
        if self.feature_names != ShipmentFeatures::LABELS {
            bail!(
                "Model artifact feature schema {:?} does not match expected {:?}",
                self.feature_names,
                ShipmentFeatures::LABELS
            );
        }
        if self.feature_importances.len() != ShipmentFeatures::COUNT {
            bail!(
                "Model artifact has {} importances, expected {}",
                self.feature_importances.len(),
                ShipmentFeatures::COUNT
            );
        }
        for (tree_idx, tree) in self.trees.iter().enumerate() {
            tree.validate(tree_idx)?;
        }
        Ok(())
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl DeliveryModel for GradientBoostedModel {
    fn predict(&self, features: &ShipmentFeatures) -> f64 {
        let row = features.as_row();
        self.base_score + self.trees.iter().map(|t| t.evaluate(&row)).sum::<f64>()
    }

    fn feature_importances(&self) -> &[f64] {
        &self.feature_importances
    }
}

#[cfg(test)]
mod tests {
    use super::{DeliveryModel, GradientBoostedModel};
    use crate::domain::ShipmentFeatures;

    /// Base 5.0 plus one stump: +3 days beyond 1000 km, -1 otherwise.
    const ARTIFACT: &str = r#"{
        "base_score": 5.0,
        "trees": [{
            "nodes": [
                {"feature": 0, "threshold": 1000.0, "left": 1, "right": 2,
                 "value": 0.0, "is_leaf": false},
                {"feature": 0, "threshold": 0.0, "left": 0, "right": 0,
                 "value": -1.0, "is_leaf": true},
                {"feature": 0, "threshold": 0.0, "left": 0, "right": 0,
                 "value": 3.0, "is_leaf": true}
            ]
        }],
        "feature_importances": [0.55, 0.1, 0.1, 0.2, 0.05],
        "feature_names": ["distancia_km", "product_weight_g", "volume_cm3",
                          "freight_value", "price"]
    }"#;

    fn features(distance_km: f64) -> ShipmentFeatures {
        ShipmentFeatures {
            distance_km,
            weight_g: 225.0,
            volume_cm3: 2000.0,
            freight_value: 20.0,
            price: 100.0,
        }
    }

    fn parse_and_validate(json: &str) -> anyhow::Result<GradientBoostedModel> {
        let model: GradientBoostedModel = serde_json::from_str(json)?;
        model.validate_schema()?;
        Ok(model)
    }

    #[test]
    fn stump_splits_on_distance() {
        let model = parse_and_validate(ARTIFACT).unwrap();
        assert_eq!(model.tree_count(), 1);
        assert_eq!(model.predict(&features(500.0)), 4.0);
        assert_eq!(model.predict(&features(1500.0)), 8.0);
    }

    #[test]
    fn prediction_is_deterministic() {
        let model = parse_and_validate(ARTIFACT).unwrap();
        let f = features(1234.5);
        assert_eq!(model.predict(&f), model.predict(&f));
    }

    #[test]
    fn importances_align_with_schema() {
        let model = parse_and_validate(ARTIFACT).unwrap();
        assert_eq!(model.feature_importances().len(), ShipmentFeatures::COUNT);
        assert!((model.feature_importances().iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mismatched_schema_is_rejected() {
        let mut artifact: serde_json::Value = serde_json::from_str(ARTIFACT).unwrap();
        artifact["feature_names"] = serde_json::json!([
            "product_weight_g",
            "distancia_km",
            "volume_cm3",
            "freight_value",
            "price"
        ]);
        assert!(parse_and_validate(&artifact.to_string()).is_err());
    }

    #[test]
    fn split_on_unknown_feature_is_rejected() {
        let mut artifact: serde_json::Value = serde_json::from_str(ARTIFACT).unwrap();
        artifact["trees"][0]["nodes"][0]["feature"] = serde_json::json!(7);
        assert!(parse_and_validate(&artifact.to_string()).is_err());
    }

    #[test]
    fn empty_tree_is_rejected() {
        let mut artifact: serde_json::Value = serde_json::from_str(ARTIFACT).unwrap();
        artifact["trees"][0]["nodes"] = serde_json::json!([]);
        assert!(parse_and_validate(&artifact.to_string()).is_err());
    }

    #[test]
    fn child_index_outside_node_array_is_rejected() {
        let mut artifact: serde_json::Value = serde_json::from_str(ARTIFACT).unwrap();
        artifact["trees"][0]["nodes"][0]["right"] = serde_json::json!(9);
        assert!(parse_and_validate(&artifact.to_string()).is_err());
    }

    #[test]
    fn self_referential_split_is_rejected() {
        // A root whose left child is itself would never terminate.
        let mut artifact: serde_json::Value = serde_json::from_str(ARTIFACT).unwrap();
        artifact["trees"][0]["nodes"][0]["left"] = serde_json::json!(0);
        assert!(parse_and_validate(&artifact.to_string()).is_err());
    }
}
