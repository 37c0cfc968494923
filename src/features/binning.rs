//! Cut-point binning with explicit interval bounds
//!
//! Intervals follow the lower-exclusive, upper-inclusive convention the
//! original training pipeline used, so bin edges land in the lower bin:
//! distance 3.0 is Very_Near, experience 2.0 is Junior.

/// A single labeled interval: `(lower, upper]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutBin {
    pub lower: f64,
    pub upper: f64,
    pub label: &'static str,
}

/// An ordered list of labeled intervals, evaluated in order.
/// Values outside every interval have no label; the caller decides how to
/// resolve the missing category (the engine falls back to the mode table).
#[derive(Debug, Clone, PartialEq)]
pub struct CutBins {
    bins: Vec<CutBin>,
}

impl CutBins {
    pub fn new(bins: Vec<CutBin>) -> Self {
        Self { bins }
    }

    /// Distance bins (km): (0,3] Very_Near, (3,7] Near, (7,12] Medium, (12,20] Far
    pub fn distance() -> Self {
        Self::new(vec![
            CutBin { lower: 0.0, upper: 3.0, label: "Very_Near" },
            CutBin { lower: 3.0, upper: 7.0, label: "Near" },
            CutBin { lower: 7.0, upper: 12.0, label: "Medium" },
            CutBin { lower: 12.0, upper: 20.0, label: "Far" },
        ])
    }

    /// Courier experience bins (years): (-1,2] Junior, (2,5] Mid, (5,10] Senior
    pub fn experience() -> Self {
        Self::new(vec![
            CutBin { lower: -1.0, upper: 2.0, label: "Junior" },
            CutBin { lower: 2.0, upper: 5.0, label: "Mid" },
            CutBin { lower: 5.0, upper: 10.0, label: "Senior" },
        ])
    }

    /// Find the label for a value, or `None` when it falls outside all bins
    pub fn label_for(&self, value: f64) -> Option<&'static str> {
        self.bins
            .iter()
            .find(|b| value > b.lower && value <= b.upper)
            .map(|b| b.label)
    }

    /// All labels in bin order
    pub fn labels(&self) -> Vec<&'static str> {
        self.bins.iter().map(|b| b.label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_bin_boundaries() {
        let bins = CutBins::distance();
        assert_eq!(bins.label_for(0.1), Some("Very_Near"));
        assert_eq!(bins.label_for(3.0), Some("Very_Near"));
        assert_eq!(bins.label_for(3.1), Some("Near"));
        assert_eq!(bins.label_for(5.0), Some("Near"));
        assert_eq!(bins.label_for(7.0), Some("Near"));
        assert_eq!(bins.label_for(10.0), Some("Medium"));
        assert_eq!(bins.label_for(12.0), Some("Medium"));
        assert_eq!(bins.label_for(15.0), Some("Far"));
        assert_eq!(bins.label_for(20.0), Some("Far"));
    }

    #[test]
    fn test_distance_outside_all_bins() {
        let bins = CutBins::distance();
        // 0.0 sits on the exclusive lower edge of the first bin
        assert_eq!(bins.label_for(0.0), None);
        assert_eq!(bins.label_for(20.1), None);
        assert_eq!(bins.label_for(25.0), None);
    }

    #[test]
    fn test_experience_bin_boundaries() {
        let bins = CutBins::experience();
        assert_eq!(bins.label_for(0.0), Some("Junior"));
        assert_eq!(bins.label_for(2.0), Some("Junior"));
        assert_eq!(bins.label_for(3.5), Some("Mid"));
        assert_eq!(bins.label_for(5.0), Some("Mid"));
        assert_eq!(bins.label_for(7.0), Some("Senior"));
        assert_eq!(bins.label_for(10.0), Some("Senior"));
    }

    #[test]
    fn test_labels_in_order() {
        assert_eq!(
            CutBins::distance().labels(),
            vec!["Very_Near", "Near", "Medium", "Far"]
        );
        assert_eq!(CutBins::experience().labels(), vec!["Junior", "Mid", "Senior"]);
    }
}
