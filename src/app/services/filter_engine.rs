//! Filtering over the merged canonical set
//!
//! Filtering is a pure function from the full record set and a criteria
//! struct to an ordered subsequence. All active criteria are conjunctive,
//! every bound is inclusive, and relative record order is preserved, so
//! re-applying empty criteria reproduces the original set.

use serde::{Deserialize, Serialize};

use crate::app::models::{CanonicalRecord, SourceTag};

/// Optional inclusive bounds over one numeric field
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    /// Inclusive lower bound, if any
    pub min: Option<f64>,

    /// Inclusive upper bound, if any
    pub max: Option<f64>,
}

impl RangeFilter {
    /// Create a range filter from optional bounds
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Whether a value satisfies both bounds
    pub fn contains(&self, value: f64) -> bool {
        if let Some(min) = self.min {
            if value < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return false;
            }
        }
        true
    }

    /// Whether the filter is fully open
    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Conjunctive filter criteria over the merged set
///
/// `source: None` means "all sources". Criteria are applied atomically:
/// a new struct replaces the previous filtered view, never mutating the
/// underlying canonical set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Restrict to one source, or `None` for all
    pub source: Option<SourceTag>,

    /// Bounds on planetary radius (Earth radii)
    pub radius: RangeFilter,

    /// Bounds on orbital period (days)
    pub period: RangeFilter,

    /// Bounds on equilibrium temperature (Kelvin)
    pub temperature: RangeFilter,
}

impl FilterCriteria {
    /// Whether a record satisfies every active criterion
    pub fn matches(&self, record: &CanonicalRecord) -> bool {
        if let Some(source) = self.source {
            if record.source != source {
                return false;
            }
        }

        self.radius.contains(record.radius)
            && self.period.contains(record.period)
            && self.temperature.contains(record.temperature)
    }

    /// Whether no criterion is active
    pub fn is_empty(&self) -> bool {
        self.source.is_none()
            && self.radius.is_open()
            && self.period.is_open()
            && self.temperature.is_open()
    }
}

/// Apply criteria to the full set, returning matching indices in order
///
/// Indices keep the filtered view cheap to rebuild and leave record
/// ownership with the canonical set.
pub fn apply(records: &[CanonicalRecord], criteria: &FilterCriteria) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| criteria.matches(record))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{Disposition, RawRow};

    fn record(id: u32, source: SourceTag, radius: f64, period: f64, temperature: f64) -> CanonicalRecord {
        CanonicalRecord {
            id,
            name: format!("object-{}", id),
            source,
            radius,
            period,
            temperature,
            disposition: Disposition::Candidate,
            raw: RawRow::new(),
        }
    }

    fn sample_set() -> Vec<CanonicalRecord> {
        vec![
            record(1, SourceTag::Kepler, 1.0, 10.0, 300.0),
            record(2, SourceTag::Kepler, 2.5, 50.0, 600.0),
            record(3, SourceTag::K2, 1.4, 20.0, 280.0),
            record(4, SourceTag::Tess, 11.0, 1.5, 1500.0),
            record(5, SourceTag::Tess, 0.8, 365.0, 255.0),
        ]
    }

    #[test]
    fn test_empty_criteria_return_everything_in_order() {
        let records = sample_set();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(apply(&records, &criteria), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_source_filter() {
        let records = sample_set();
        let criteria = FilterCriteria {
            source: Some(SourceTag::Tess),
            ..Default::default()
        };
        assert_eq!(apply(&records, &criteria), vec![3, 4]);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let records = sample_set();
        let criteria = FilterCriteria {
            radius: RangeFilter::new(Some(1.0), Some(2.5)),
            ..Default::default()
        };
        // Records with radius exactly 1.0 and 2.5 are kept
        assert_eq!(apply(&records, &criteria), vec![0, 1, 2]);
    }

    #[test]
    fn test_open_ended_ranges() {
        let records = sample_set();

        let min_only = FilterCriteria {
            period: RangeFilter::new(Some(20.0), None),
            ..Default::default()
        };
        assert_eq!(apply(&records, &min_only), vec![1, 2, 4]);

        let max_only = FilterCriteria {
            temperature: RangeFilter::new(None, Some(300.0)),
            ..Default::default()
        };
        assert_eq!(apply(&records, &max_only), vec![0, 2, 4]);
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let records = sample_set();
        let criteria = FilterCriteria {
            source: Some(SourceTag::Kepler),
            radius: RangeFilter::new(Some(2.0), None),
            period: RangeFilter::new(None, Some(100.0)),
            ..Default::default()
        };
        assert_eq!(apply(&records, &criteria), vec![1]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample_set();
        let criteria = FilterCriteria {
            temperature: RangeFilter::new(Some(260.0), Some(700.0)),
            ..Default::default()
        };

        let once = apply(&records, &criteria);
        let matching: Vec<CanonicalRecord> =
            once.iter().map(|&i| records[i].clone()).collect();
        let twice = apply(&matching, &criteria);

        // Filtering an already-filtered sequence keeps every element
        assert_eq!(twice.len(), once.len());
        assert_eq!(twice, (0..once.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_narrowing_a_bound_never_grows_the_result() {
        let records = sample_set();

        let mut previous = apply(&records, &FilterCriteria::default()).len();
        for min in [0.5, 1.0, 1.5, 2.0, 5.0, 12.0] {
            let criteria = FilterCriteria {
                radius: RangeFilter::new(Some(min), None),
                ..Default::default()
            };
            let current = apply(&records, &criteria).len();
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn test_no_matches_yields_empty_view() {
        let records = sample_set();
        let criteria = FilterCriteria {
            radius: RangeFilter::new(Some(100.0), None),
            ..Default::default()
        };
        assert!(apply(&records, &criteria).is_empty());
    }
}
