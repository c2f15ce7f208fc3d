use serde::Deserialize;

use crate::models::features::{FeatureVector, FEATURE_COUNT};

use super::{ensure_finite, ModelLoadError, PredictError, SuccessRatePredictor};

/// Averaged ensemble of regression trees.
#[derive(Debug, Clone, Deserialize)]
pub struct ForestModel {
    pub trees: Vec<RegressionTree>,
}

/// Flat node list; node 0 is the root.
#[derive(Debug, Clone, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Go `left` when `x[feature] <= threshold`, else `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf { value: f64 },
}

impl ForestModel {
    pub(super) fn validate(&self) -> Result<(), ModelLoadError> {
        if self.trees.is_empty() {
            return Err(ModelLoadError::Invalid("forest has no trees".to_string()));
        }
        for (t, tree) in self.trees.iter().enumerate() {
            tree.validate()
                .map_err(|reason| ModelLoadError::Invalid(format!("tree {t}: {reason}")))?;
        }
        Ok(())
    }
}

impl RegressionTree {
    // Children must point forward, which rules out cycles.
    fn validate(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("no nodes".to_string());
        }
        let len = self.nodes.len();
        for (i, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= FEATURE_COUNT {
                        return Err(format!("node {i} splits on unknown feature {feature}"));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {i} has a non-finite threshold"));
                    }
                    for child in [left, right] {
                        if child <= i || child >= len {
                            return Err(format!("node {i} has invalid child {child}"));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(format!("leaf {i} has a non-finite value"));
                    }
                }
            }
        }
        Ok(())
    }

    fn predict(&self, x: &[f64; FEATURE_COUNT]) -> Result<f64, PredictError> {
        let mut idx = 0;
        loop {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    idx = if x[*feature] <= *threshold { *left } else { *right };
                }
                None => return Err(PredictError::Model(format!("dangling node index {idx}"))),
            }
        }
    }
}

impl SuccessRatePredictor for ForestModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictError> {
        let x = features.values();
        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.predict(x)?;
        }
        ensure_finite(total / self.trees.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump(feature: usize, threshold: f64, low: f64, high: f64) -> RegressionTree {
        RegressionTree {
            nodes: vec![
                TreeNode::Split {
                    feature,
                    threshold,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { value: low },
                TreeNode::Leaf { value: high },
            ],
        }
    }

    fn readings(heart_rate: f64, error_rate: f64) -> FeatureVector {
        FeatureVector::new([heart_rate, 0.9, 0.3, 0.95, 0.8, error_rate])
    }

    #[test]
    fn test_split_goes_left_on_equal_threshold() {
        let forest = ForestModel {
            trees: vec![stump(0, 80.0, 50.0, 95.0)],
        };
        assert_eq!(forest.predict(&readings(80.0, 0.0)).unwrap(), 50.0);
        assert_eq!(forest.predict(&readings(80.5, 0.0)).unwrap(), 95.0);
    }

    #[test]
    fn test_forest_averages_trees() {
        let forest = ForestModel {
            trees: vec![stump(0, 100.0, 60.0, 0.0), stump(5, 0.1, 80.0, 0.0)],
        };
        assert_eq!(forest.predict(&readings(70.0, 0.05)).unwrap(), 70.0);
    }

    #[test]
    fn test_decodes_from_json() {
        let raw = r#"{"trees":[{"nodes":[
            {"feature":5,"threshold":0.1,"left":1,"right":2},
            {"value":91.0},
            {"value":40.0}
        ]}]}"#;
        let forest: ForestModel = serde_json::from_str(raw).unwrap();
        assert!(forest.validate().is_ok());
        assert_eq!(forest.predict(&readings(80.0, 0.05)).unwrap(), 91.0);
    }

    #[test]
    fn test_empty_forest_rejected() {
        let forest = ForestModel { trees: vec![] };
        assert!(matches!(forest.validate(), Err(ModelLoadError::Invalid(_))));
    }

    #[test]
    fn test_backward_child_rejected() {
        let tree = RegressionTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 0,
                    threshold: 1.0,
                    left: 0,
                    right: 1,
                },
                TreeNode::Leaf { value: 1.0 },
            ],
        };
        let err = tree.validate().unwrap_err();
        assert!(err.contains("invalid child 0"), "{err}");
    }

    #[test]
    fn test_out_of_range_child_rejected() {
        let forest = ForestModel {
            trees: vec![RegressionTree {
                nodes: vec![TreeNode::Split {
                    feature: 0,
                    threshold: 1.0,
                    left: 1,
                    right: 7,
                }],
            }],
        };
        let err = forest.validate().unwrap_err().to_string();
        assert!(err.starts_with("Invalid model: tree 0"), "{err}");
    }

    #[test]
    fn test_unknown_feature_rejected() {
        let tree = stump(FEATURE_COUNT, 1.0, 0.0, 1.0);
        assert!(tree.validate().unwrap_err().contains("unknown feature"));
    }

    #[test]
    fn test_unvalidated_dangling_index_is_predict_error() {
        let forest = ForestModel {
            trees: vec![RegressionTree {
                nodes: vec![TreeNode::Split {
                    feature: 0,
                    threshold: 1.0,
                    left: 3,
                    right: 3,
                }],
            }],
        };
        assert!(matches!(
            forest.predict(&readings(0.0, 0.0)),
            Err(PredictError::Model(_))
        ));
    }
}
