//! Pre-fitted artifact bundle
//!
//! Seven JSON files in one directory, produced by the upstream training
//! pipeline: column lists, the fitted encoder, the final feature order, the
//! median/mode fill tables, and the trained model. Loaded once at startup and
//! treated as read-only for the process lifetime; share via `Arc`, no locking.

use crate::encoding::OneHotEncoder;
use crate::error::{EtaError, Result};
use crate::model::GradientBoostedRegressor;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

pub const MODEL_FILE: &str = "model.json";
pub const ENCODER_FILE: &str = "encoder.json";
pub const NUM_COLS_FILE: &str = "num_cols.json";
pub const CAT_COLS_FILE: &str = "cat_cols.json";
pub const FEATURE_ORDER_FILE: &str = "feature_order.json";
pub const NUM_MEDIANS_FILE: &str = "num_medians.json";
pub const CAT_MODES_FILE: &str = "cat_modes.json";

/// Everything the engine needs to turn a raw order into an estimate.
/// Immutable after load.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub num_cols: Vec<String>,
    pub cat_cols: Vec<String>,
    pub encoder: OneHotEncoder,
    pub feature_order: Vec<String>,
    pub num_medians: HashMap<String, f64>,
    pub cat_modes: HashMap<String, String>,
    pub model: GradientBoostedRegressor,
}

impl ArtifactBundle {
    /// Load and validate a bundle from a directory.
    /// Any missing or undeserializable file is fatal.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        let num_cols: Vec<String> = read_artifact(dir, NUM_COLS_FILE)?;
        let cat_cols: Vec<String> = read_artifact(dir, CAT_COLS_FILE)?;
        let mut encoder: OneHotEncoder = read_artifact(dir, ENCODER_FILE)?;
        let feature_order: Vec<String> = read_artifact(dir, FEATURE_ORDER_FILE)?;
        let num_medians: HashMap<String, f64> = read_artifact(dir, NUM_MEDIANS_FILE)?;
        let cat_modes: HashMap<String, String> = read_artifact(dir, CAT_MODES_FILE)?;
        let model: GradientBoostedRegressor = read_artifact(dir, MODEL_FILE)?;

        // Derived lookup state is not serialized
        encoder.rebuild_index();

        let bundle = Self {
            num_cols,
            cat_cols,
            encoder,
            feature_order,
            num_medians,
            cat_modes,
            model,
        };
        bundle.validate()?;

        info!(
            dir = %dir.display(),
            n_features = bundle.feature_order.len(),
            n_trees = bundle.model.n_trees(),
            "artifact bundle loaded"
        );
        Ok(bundle)
    }

    /// Write the bundle out in the same seven-file layout.
    /// Used by artifact producers and test fixtures.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        write_artifact(dir, NUM_COLS_FILE, &self.num_cols)?;
        write_artifact(dir, CAT_COLS_FILE, &self.cat_cols)?;
        write_artifact(dir, ENCODER_FILE, &self.encoder)?;
        write_artifact(dir, FEATURE_ORDER_FILE, &self.feature_order)?;
        write_artifact(dir, NUM_MEDIANS_FILE, &self.num_medians)?;
        write_artifact(dir, CAT_MODES_FILE, &self.cat_modes)?;
        write_artifact(dir, MODEL_FILE, &self.model)?;
        Ok(())
    }

    /// Cross-artifact schema checks
    fn validate(&self) -> Result<()> {
        self.model.validate()?;

        if self.model.n_features() != self.feature_order.len() {
            return Err(EtaError::ArtifactError(format!(
                "model expects {} features but feature_order lists {}",
                self.model.n_features(),
                self.feature_order.len()
            )));
        }

        let fitted: HashSet<&str> = self.encoder.fitted_columns().collect();
        let declared: HashSet<&str> = self.cat_cols.iter().map(String::as_str).collect();
        if fitted != declared {
            return Err(EtaError::ArtifactError(format!(
                "encoder columns {:?} do not match cat_cols {:?}",
                fitted, declared
            )));
        }

        Ok(())
    }
}

fn read_artifact<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T> {
    let path = dir.join(name);
    let text = std::fs::read_to_string(&path)
        .map_err(|e| EtaError::ArtifactError(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&text)
        .map_err(|e| EtaError::ArtifactError(format!("{}: {}", path.display(), e)))
}

fn write_artifact<T: Serialize>(dir: &Path, name: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(dir.join(name), json)?;
    Ok(())
}
