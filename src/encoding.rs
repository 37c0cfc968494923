//! Fixed-vocabulary one-hot encoding
//!
//! The encoder carries the per-column category vocabularies fixed at training
//! time. Each category becomes one `{column}_{value}` indicator column; a value
//! not in the vocabulary encodes to all-zero indicators for that column rather
//! than raising an error.

use crate::error::{EtaError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// The fitted vocabulary for one categorical column, in fitted order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnVocabulary {
    pub column: String,
    pub values: Vec<String>,
}

/// A fitted one-hot encoder over a fixed set of categorical columns.
///
/// The `index` lookup maps output feature names to indicator positions. It is
/// derived state, rebuilt after deserialization via [`OneHotEncoder::rebuild_index`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneHotEncoder {
    columns: Vec<ColumnVocabulary>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl OneHotEncoder {
    /// Build an encoder from fitted vocabularies
    pub fn new(columns: Vec<ColumnVocabulary>) -> Self {
        let mut encoder = Self {
            columns,
            index: HashMap::new(),
        };
        encoder.rebuild_index();
        encoder
    }

    /// Rebuild the feature-name → indicator-position lookup.
    /// Must be called after deserializing, before the first transform.
    pub fn rebuild_index(&mut self) {
        self.index.clear();
        let mut position = 0;
        for vocab in &self.columns {
            for value in &vocab.values {
                self.index
                    .insert(feature_name(&vocab.column, value), position);
                position += 1;
            }
        }
    }

    /// Total number of indicator columns produced
    pub fn n_output_features(&self) -> usize {
        self.columns.iter().map(|v| v.values.len()).sum()
    }

    /// Output feature names, in indicator order
    pub fn feature_names_out(&self) -> Vec<String> {
        self.columns
            .iter()
            .flat_map(|v| v.values.iter().map(|value| feature_name(&v.column, value)))
            .collect()
    }

    /// Columns this encoder was fitted on, in order
    pub fn fitted_columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|v| v.column.as_str())
    }

    /// Position of a named output feature in the indicator vector
    pub fn output_index(&self, feature: &str) -> Option<usize> {
        self.index.get(feature).copied()
    }

    /// Encode one row of categorical values into the full indicator vector.
    ///
    /// `row` holds `(column, value)` pairs. Every fitted column must be
    /// present; a value outside the fitted vocabulary yields all-zero
    /// indicators for that column.
    pub fn transform(&self, row: &[(String, String)]) -> Result<Vec<f64>> {
        let lookup: HashMap<&str, &str> = row
            .iter()
            .map(|(column, value)| (column.as_str(), value.as_str()))
            .collect();

        let mut indicators = vec![0.0; self.n_output_features()];
        for vocab in &self.columns {
            let value: &str = lookup.get(vocab.column.as_str()).copied().ok_or_else(|| {
                EtaError::EncodingError(format!(
                    "no value supplied for fitted column '{}'",
                    vocab.column
                ))
            })?;

            match self.output_index(&feature_name(&vocab.column, value)) {
                Some(position) => indicators[position] = 1.0,
                None => {
                    // Unknown category: leave the column's indicators at zero
                    debug!(column = %vocab.column, value = %value, "unknown category, encoding as all zeros");
                }
            }
        }

        Ok(indicators)
    }
}

/// Output column naming: `{column}_{value}`
fn feature_name(column: &str, value: &str) -> String {
    format!("{}_{}", column, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_encoder() -> OneHotEncoder {
        OneHotEncoder::new(vec![
            ColumnVocabulary {
                column: "weather".to_string(),
                values: vec!["Clear".to_string(), "Rainy".to_string(), "Snowy".to_string()],
            },
            ColumnVocabulary {
                column: "traffic_level".to_string(),
                values: vec!["Low".to_string(), "Medium".to_string(), "High".to_string()],
            },
        ])
    }

    fn row(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(c, v)| (c.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_feature_names_order() {
        let encoder = sample_encoder();
        assert_eq!(
            encoder.feature_names_out(),
            vec![
                "weather_Clear",
                "weather_Rainy",
                "weather_Snowy",
                "traffic_level_Low",
                "traffic_level_Medium",
                "traffic_level_High",
            ]
        );
        assert_eq!(encoder.n_output_features(), 6);
    }

    #[test]
    fn test_transform_known_values() {
        let encoder = sample_encoder();
        let indicators = encoder
            .transform(&row(&[("weather", "Rainy"), ("traffic_level", "High")]))
            .unwrap();
        assert_eq!(indicators, vec![0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_unknown_category_encodes_to_zeros() {
        let encoder = sample_encoder();
        let indicators = encoder
            .transform(&row(&[("weather", "Hail"), ("traffic_level", "Low")]))
            .unwrap();
        assert_eq!(indicators, vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let encoder = sample_encoder();
        let result = encoder.transform(&row(&[("weather", "Clear")]));
        assert!(matches!(result, Err(EtaError::EncodingError(_))));
    }

    #[test]
    fn test_index_rebuilt_after_serde_roundtrip() {
        let encoder = sample_encoder();
        let json = serde_json::to_string(&encoder).unwrap();
        let mut restored: OneHotEncoder = serde_json::from_str(&json).unwrap();
        // index is skipped by serde and must be rebuilt
        assert_eq!(restored.output_index("weather_Clear"), None);
        restored.rebuild_index();
        assert_eq!(restored.output_index("weather_Clear"), Some(0));
        assert_eq!(restored.output_index("traffic_level_High"), Some(5));
    }
}
