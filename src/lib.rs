//! Delivery ETA inference engine
//!
//! Turns six raw order attributes into a predicted delivery time using a
//! pre-fitted artifact bundle: engineered features, a fixed-vocabulary one-hot
//! encoder, and a gradient-boosted regression model.
//!
//! # Modules
//!
//! - [`order`] - Raw order input and its categorical domains
//! - [`features`] - Binning and derived-feature engineering
//! - [`encoding`] - Fitted one-hot encoder
//! - [`model`] - Gradient-boosted regressor (predict-only)
//! - [`artifacts`] - Artifact bundle loading and validation
//! - [`inference`] - The per-request transform-and-predict pipeline
//! - [`cli`] - Interactive prompt surface

pub mod error;

pub mod artifacts;
pub mod encoding;
pub mod features;
pub mod inference;
pub mod model;
pub mod order;

pub mod cli;

pub use error::{EtaError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::artifacts::ArtifactBundle;
    pub use crate::encoding::{ColumnVocabulary, OneHotEncoder};
    pub use crate::error::{EtaError, Result};
    pub use crate::features::{CutBins, EngineeredRow};
    pub use crate::inference::{EtaEngine, Prediction};
    pub use crate::model::{GradientBoostedRegressor, TreeNode};
    pub use crate::order::{
        RawOrderInput, TimeOfDay, TrafficLevel, VehicleType, Weather,
    };
}
