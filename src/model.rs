//! Gradient-boosted regression ensemble, predict-only
//!
//! The serialized artifact holds a base score, a shrinkage factor, and a list
//! of regression trees. Prediction is base_score + learning_rate * Σ tree(x).
//! Training lives in the upstream pipeline that produced the artifact; this
//! crate only consumes it.

use crate::error::{EtaError, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// A single node in a regression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    Leaf {
        weight: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    fn predict(&self, sample: &[f64]) -> f64 {
        match self {
            TreeNode::Leaf { weight } => *weight,
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if sample[*feature] <= *threshold {
                    left.predict(sample)
                } else {
                    right.predict(sample)
                }
            }
        }
    }

    /// Largest feature index referenced by this tree, if it splits at all
    fn max_feature(&self) -> Option<usize> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Split {
                feature,
                left,
                right,
                ..
            } => Some(
                (*feature)
                    .max(left.max_feature().unwrap_or(0))
                    .max(right.max_feature().unwrap_or(0)),
            ),
        }
    }
}

/// A trained gradient-boosted regressor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoostedRegressor {
    base_score: f64,
    learning_rate: f64,
    trees: Vec<TreeNode>,
    n_features: usize,
}

impl GradientBoostedRegressor {
    pub fn new(base_score: f64, learning_rate: f64, trees: Vec<TreeNode>, n_features: usize) -> Self {
        Self {
            base_score,
            learning_rate,
            trees,
            n_features,
        }
    }

    /// Number of input features the ensemble was trained on
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Check internal consistency: no tree may reference a feature index
    /// outside the declared feature count
    pub fn validate(&self) -> Result<()> {
        for (i, tree) in self.trees.iter().enumerate() {
            if let Some(max) = tree.max_feature() {
                if max >= self.n_features {
                    return Err(EtaError::ArtifactError(format!(
                        "tree {} references feature {} but the model declares {} features",
                        i, max, self.n_features
                    )));
                }
            }
        }
        Ok(())
    }

    /// Predict for every row of `x`
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.n_features {
            return Err(EtaError::ShapeError {
                expected: format!("{} features", self.n_features),
                actual: format!("{} features", x.ncols()),
            });
        }

        let mut predictions = Array1::from_elem(x.nrows(), self.base_score);
        for (i, row) in x.rows().into_iter().enumerate() {
            let sample = row
                .as_slice()
                .ok_or_else(|| EtaError::ShapeError {
                    expected: "contiguous row".to_string(),
                    actual: "strided row".to_string(),
                })?;
            for tree in &self.trees {
                predictions[i] += self.learning_rate * tree.predict(sample);
            }
        }
        Ok(predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn stump(feature: usize, threshold: f64, left: f64, right: f64) -> TreeNode {
        TreeNode::Split {
            feature,
            threshold,
            left: Box::new(TreeNode::Leaf { weight: left }),
            right: Box::new(TreeNode::Leaf { weight: right }),
        }
    }

    #[test]
    fn test_leaf_only_ensemble() {
        let model = GradientBoostedRegressor::new(
            30.0,
            0.5,
            vec![TreeNode::Leaf { weight: 4.0 }, TreeNode::Leaf { weight: 2.0 }],
            3,
        );
        let x = array![[0.0, 0.0, 0.0], [1.0, 2.0, 3.0]];
        let preds = model.predict(&x).unwrap();
        // 30 + 0.5 * (4 + 2) = 33 for every row
        assert_eq!(preds.to_vec(), vec![33.0, 33.0]);
    }

    #[test]
    fn test_split_routing() {
        let model =
            GradientBoostedRegressor::new(0.0, 1.0, vec![stump(1, 5.0, -1.0, 1.0)], 2);
        let x = array![[0.0, 4.0], [0.0, 5.0], [0.0, 6.0]];
        let preds = model.predict(&x).unwrap();
        // threshold is <=, so 5.0 routes left
        assert_eq!(preds.to_vec(), vec![-1.0, -1.0, 1.0]);
    }

    #[test]
    fn test_shape_mismatch() {
        let model = GradientBoostedRegressor::new(0.0, 1.0, vec![], 4);
        let x = array![[1.0, 2.0]];
        assert!(matches!(
            model.predict(&x),
            Err(EtaError::ShapeError { .. })
        ));
    }

    #[test]
    fn test_validate_feature_bounds() {
        let good = GradientBoostedRegressor::new(0.0, 1.0, vec![stump(1, 0.0, 0.0, 0.0)], 2);
        assert!(good.validate().is_ok());

        let bad = GradientBoostedRegressor::new(0.0, 1.0, vec![stump(5, 0.0, 0.0, 0.0)], 2);
        assert!(matches!(bad.validate(), Err(EtaError::ArtifactError(_))));
    }

    #[test]
    fn test_serde_roundtrip() {
        let model = GradientBoostedRegressor::new(30.0, 0.1, vec![stump(0, 1.5, 2.0, 8.0)], 1);
        let json = serde_json::to_string(&model).unwrap();
        let restored: GradientBoostedRegressor = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, model);

        let x = array![[1.0], [2.0]];
        assert_eq!(
            restored.predict(&x).unwrap().to_vec(),
            model.predict(&x).unwrap().to_vec()
        );
    }
}
