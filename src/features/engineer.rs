//! Derivation of engineered features from a raw order

use super::CutBins;
use crate::order::{RawOrderInput, TrafficLevel};

/// Multiplier applied to distance per traffic level
pub fn traffic_weight(level: TrafficLevel) -> f64 {
    match level {
        TrafficLevel::Low => 1.0,
        TrafficLevel::Medium => 1.3,
        TrafficLevel::High => 1.6,
    }
}

/// A raw order plus its derived fields.
///
/// The binned categories are `Option` because a value outside all bins has no
/// label; the engine resolves those from the fitted mode table before encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineeredRow {
    pub input: RawOrderInput,
    pub distance_category: Option<&'static str>,
    pub is_peak_hour: u8,
    pub experience_level: Option<&'static str>,
    pub distance_x_traffic: f64,
    pub prep_x_peak: f64,
}

impl EngineeredRow {
    /// Derive all engineered fields. Deterministic and pure.
    pub fn from_input(input: &RawOrderInput) -> Self {
        let is_peak_hour = u8::from(input.time_of_day.is_peak());
        Self {
            distance_category: CutBins::distance().label_for(input.distance_km),
            experience_level: CutBins::experience().label_for(input.courier_experience_yrs),
            is_peak_hour,
            distance_x_traffic: input.distance_km * traffic_weight(input.traffic_level),
            prep_x_peak: f64::from(input.preparation_time_min) * f64::from(is_peak_hour),
            input: input.clone(),
        }
    }

    /// Look up a numeric column by name. Returns `None` for unknown columns
    /// and for non-finite values, which both fall back to the median table.
    pub fn numeric_value(&self, column: &str) -> Option<f64> {
        let value = match column {
            "distance_km" => self.input.distance_km,
            "preparation_time_min" => f64::from(self.input.preparation_time_min),
            "courier_experience_yrs" => self.input.courier_experience_yrs,
            "is_peak_hour" => f64::from(self.is_peak_hour),
            "distance_x_traffic" => self.distance_x_traffic,
            "prep_x_peak" => self.prep_x_peak,
            _ => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Look up a categorical column by name. Returns `None` for unknown
    /// columns and for unbinned categories, which fall back to the mode table.
    pub fn categorical_value(&self, column: &str) -> Option<&str> {
        match column {
            "weather" => Some(self.input.weather.as_str()),
            "traffic_level" => Some(self.input.traffic_level.as_str()),
            "time_of_day" => Some(self.input.time_of_day.as_str()),
            "vehicle_type" => Some(self.input.vehicle_type.as_str()),
            "distance_category" => self.distance_category,
            "experience_level" => self.experience_level,
            _ => None,
        }
    }
}
