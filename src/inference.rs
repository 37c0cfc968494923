//! The per-request transform-and-predict pipeline
//!
//! A single-shot, stateless pure function over the immutable artifact bundle:
//! validate, engineer, fill, encode, reindex to the fitted feature order,
//! predict. No caching, no batching, no shared mutable state.

use crate::artifacts::ArtifactBundle;
use crate::error::{EtaError, Result};
use crate::features::EngineeredRow;
use crate::order::RawOrderInput;
use ndarray::{Array1, Array2};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// A delivery-time estimate in minutes, plus the out-of-distribution advisory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub minutes: f64,
    /// Set when the requested distance exceeds the training range; the
    /// estimate is still computed but should be displayed with a warning.
    pub out_of_range: bool,
}

/// Prediction engine over a loaded artifact bundle
#[derive(Debug, Clone)]
pub struct EtaEngine {
    artifacts: Arc<ArtifactBundle>,
}

impl EtaEngine {
    pub fn new(artifacts: Arc<ArtifactBundle>) -> Self {
        Self { artifacts }
    }

    /// Load the artifact bundle from a directory and build an engine
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Arc::new(ArtifactBundle::load(dir)?)))
    }

    pub fn artifacts(&self) -> &ArtifactBundle {
        &self.artifacts
    }

    /// Produce a delivery-time estimate for one order
    pub fn predict(&self, input: &RawOrderInput) -> Result<Prediction> {
        input.validate()?;

        let out_of_range = input.exceeds_trained_distance();
        if out_of_range {
            warn!(
                distance_km = input.distance_km,
                "distance exceeds training range, prediction may be less reliable"
            );
        }

        let vector = self.feature_vector(input)?;
        let x: Array2<f64> = vector.insert_axis(ndarray::Axis(0));
        let predictions = self.artifacts.model.predict(&x)?;
        let minutes = predictions[0];

        Ok(Prediction { minutes, out_of_range })
    }

    /// Assemble the model-ready feature vector for one order: engineered
    /// fields, median/mode fills, one-hot indicators, reindexed to the fitted
    /// feature order with zero-fill for absent columns.
    pub fn feature_vector(&self, input: &RawOrderInput) -> Result<Array1<f64>> {
        let row = EngineeredRow::from_input(input);
        let numeric = self.resolve_numeric(&row)?;
        let categorical = self.resolve_categorical(&row)?;
        let indicators = self.artifacts.encoder.transform(&categorical)?;

        let values: Vec<f64> = self
            .artifacts
            .feature_order
            .iter()
            .map(|feature| {
                if let Some(&v) = numeric.get(feature.as_str()) {
                    v
                } else if let Some(position) = self.artifacts.encoder.output_index(feature) {
                    indicators[position]
                } else {
                    // Column absent after encoding: zero-fill per the reindex contract
                    0.0
                }
            })
            .collect();

        Ok(Array1::from_vec(values))
    }

    /// Resolve every declared numeric column, falling back to the fitted
    /// median when the row cannot supply a finite value.
    fn resolve_numeric(&self, row: &EngineeredRow) -> Result<HashMap<String, f64>> {
        let mut values = HashMap::with_capacity(self.artifacts.num_cols.len());
        for column in &self.artifacts.num_cols {
            let value = match row.numeric_value(column) {
                Some(v) => v,
                None => {
                    let median = self
                        .artifacts
                        .num_medians
                        .get(column)
                        .copied()
                        .ok_or_else(|| EtaError::FeatureNotFound(column.clone()))?;
                    debug!(column = %column, median, "numeric column missing, filled with median");
                    median
                }
            };
            values.insert(column.clone(), value);
        }
        Ok(values)
    }

    /// Resolve every declared categorical column, falling back to the fitted
    /// mode when the row has no label (e.g. a distance outside every bin).
    fn resolve_categorical(&self, row: &EngineeredRow) -> Result<Vec<(String, String)>> {
        let mut values = Vec::with_capacity(self.artifacts.cat_cols.len());
        for column in &self.artifacts.cat_cols {
            let value = match row.categorical_value(column) {
                Some(v) => v.to_string(),
                None => {
                    let mode = self.artifacts.cat_modes.get(column).cloned().ok_or_else(|| {
                        EtaError::EncodingError(format!(
                            "no value and no mode for categorical column '{}'",
                            column
                        ))
                    })?;
                    debug!(column = %column, mode = %mode, "categorical column missing, filled with mode");
                    mode
                }
            };
            values.push((column.clone(), value));
        }
        Ok(values)
    }
}
