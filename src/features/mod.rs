//! Feature engineering
//!
//! Derives the engineered fields the model was trained on from a raw order:
//! binned distance and experience categories, the peak-hour indicator, and the
//! two interaction features.

mod binning;
mod engineer;

pub use binning::{CutBin, CutBins};
pub use engineer::{traffic_weight, EngineeredRow};
