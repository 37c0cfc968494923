//! Raw order input and its categorical domains

use crate::error::{EtaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance beyond which the model extrapolates outside its training data (km).
/// Inputs above this are still predicted, but flagged as advisory.
pub const MAX_TRAINED_DISTANCE_KM: f64 = 20.0;

/// Valid range for order distance (km)
pub const DISTANCE_RANGE_KM: (f64, f64) = (0.1, 50.0);
/// Valid range for preparation time (minutes)
pub const PREP_TIME_RANGE_MIN: (u32, u32) = (1, 60);
/// Valid range for courier experience (years)
pub const EXPERIENCE_RANGE_YRS: (f64, f64) = (0.0, 10.0);

/// Weather conditions at order time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    Clear,
    Rainy,
    Foggy,
    Windy,
    Snowy,
}

impl Weather {
    pub const ALL: [Weather; 5] = [
        Weather::Clear,
        Weather::Rainy,
        Weather::Foggy,
        Weather::Windy,
        Weather::Snowy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Clear => "Clear",
            Weather::Rainy => "Rainy",
            Weather::Foggy => "Foggy",
            Weather::Windy => "Windy",
            Weather::Snowy => "Snowy",
        }
    }
}

/// Traffic level on the delivery route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrafficLevel {
    Low,
    Medium,
    High,
}

impl TrafficLevel {
    pub const ALL: [TrafficLevel; 3] = [TrafficLevel::Low, TrafficLevel::Medium, TrafficLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficLevel::Low => "Low",
            TrafficLevel::Medium => "Medium",
            TrafficLevel::High => "High",
        }
    }
}

/// Time-of-day bucket the order was placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }

    /// Morning and Evening are the delivery peak windows
    pub fn is_peak(&self) -> bool {
        matches!(self, TimeOfDay::Morning | TimeOfDay::Evening)
    }
}

/// Courier vehicle type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Bike,
    Scooter,
    Car,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [VehicleType::Bike, VehicleType::Scooter, VehicleType::Car];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Bike => "Bike",
            VehicleType::Scooter => "Scooter",
            VehicleType::Car => "Car",
        }
    }
}

macro_rules! impl_display_fromstr {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = EtaError;

            fn from_str(s: &str) -> Result<Self> {
                $ty::ALL
                    .iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
                    .copied()
                    .ok_or_else(|| {
                        EtaError::ValidationError(format!(
                            "'{}' is not a valid {}",
                            s,
                            stringify!($ty)
                        ))
                    })
            }
        }
    };
}

impl_display_fromstr!(Weather);
impl_display_fromstr!(TrafficLevel);
impl_display_fromstr!(TimeOfDay);
impl_display_fromstr!(VehicleType);

/// A single order as captured by the input surface.
/// Immutable after capture; one instance per prediction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOrderInput {
    pub distance_km: f64,
    pub weather: Weather,
    pub traffic_level: TrafficLevel,
    pub time_of_day: TimeOfDay,
    pub vehicle_type: VehicleType,
    pub preparation_time_min: u32,
    pub courier_experience_yrs: f64,
}

impl RawOrderInput {
    /// Check the scalar fields against their declared ranges.
    ///
    /// A distance above [`MAX_TRAINED_DISTANCE_KM`] is *not* an error here;
    /// it is surfaced as an advisory on the prediction instead.
    pub fn validate(&self) -> Result<()> {
        if !self.distance_km.is_finite()
            || self.distance_km < DISTANCE_RANGE_KM.0
            || self.distance_km > DISTANCE_RANGE_KM.1
        {
            return Err(EtaError::ValidationError(format!(
                "distance_km must be within [{}, {}], got {}",
                DISTANCE_RANGE_KM.0, DISTANCE_RANGE_KM.1, self.distance_km
            )));
        }
        if self.preparation_time_min < PREP_TIME_RANGE_MIN.0
            || self.preparation_time_min > PREP_TIME_RANGE_MIN.1
        {
            return Err(EtaError::ValidationError(format!(
                "preparation_time_min must be within [{}, {}], got {}",
                PREP_TIME_RANGE_MIN.0, PREP_TIME_RANGE_MIN.1, self.preparation_time_min
            )));
        }
        if !self.courier_experience_yrs.is_finite()
            || self.courier_experience_yrs < EXPERIENCE_RANGE_YRS.0
            || self.courier_experience_yrs > EXPERIENCE_RANGE_YRS.1
        {
            return Err(EtaError::ValidationError(format!(
                "courier_experience_yrs must be within [{}, {}], got {}",
                EXPERIENCE_RANGE_YRS.0, EXPERIENCE_RANGE_YRS.1, self.courier_experience_yrs
            )));
        }
        Ok(())
    }

    /// True when the distance exceeds the range covered by the training data
    pub fn exceeds_trained_distance(&self) -> bool {
        self.distance_km > MAX_TRAINED_DISTANCE_KM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> RawOrderInput {
        RawOrderInput {
            distance_km: 5.0,
            weather: Weather::Clear,
            traffic_level: TrafficLevel::Low,
            time_of_day: TimeOfDay::Afternoon,
            vehicle_type: VehicleType::Bike,
            preparation_time_min: 15,
            courier_experience_yrs: 2.0,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(sample_input().validate().is_ok());
    }

    #[test]
    fn test_distance_out_of_hard_range() {
        let mut input = sample_input();
        input.distance_km = 0.0;
        assert!(input.validate().is_err());
        input.distance_km = 51.0;
        assert!(input.validate().is_err());
        input.distance_km = f64::NAN;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_prep_time_range() {
        let mut input = sample_input();
        input.preparation_time_min = 0;
        assert!(input.validate().is_err());
        input.preparation_time_min = 61;
        assert!(input.validate().is_err());
        input.preparation_time_min = 60;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_experience_range() {
        let mut input = sample_input();
        input.courier_experience_yrs = -0.1;
        assert!(input.validate().is_err());
        input.courier_experience_yrs = 10.0;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_advisory_threshold_is_not_an_error() {
        let mut input = sample_input();
        input.distance_km = 25.0;
        assert!(input.validate().is_ok());
        assert!(input.exceeds_trained_distance());

        input.distance_km = 20.0;
        assert!(!input.exceeds_trained_distance());
    }

    #[test]
    fn test_peak_hour_windows() {
        assert!(TimeOfDay::Morning.is_peak());
        assert!(TimeOfDay::Evening.is_peak());
        assert!(!TimeOfDay::Afternoon.is_peak());
        assert!(!TimeOfDay::Night.is_peak());
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("Rainy".parse::<Weather>().unwrap(), Weather::Rainy);
        assert_eq!("medium".parse::<TrafficLevel>().unwrap(), TrafficLevel::Medium);
        assert_eq!(" Night ".parse::<TimeOfDay>().unwrap(), TimeOfDay::Night);
        assert!("Hovercraft".parse::<VehicleType>().is_err());
    }

    #[test]
    fn test_enum_roundtrip_display() {
        for w in Weather::ALL {
            assert_eq!(w.to_string().parse::<Weather>().unwrap(), w);
        }
    }
}
