// file: src/pipeline/aggregator.rs
// description: totals and summary statistics computed over a record set
// reference: pure functions over the record set, recomputed on demand

use crate::error::{PipelineError, Result};
use crate::models::RecordSet;
use serde::Serialize;

/// Min / max / mean of the declared missing counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeclaredStats {
    pub min: u64,
    pub max: u64,
    pub mean: f64,
}

impl DeclaredStats {
    pub fn compute(records: &RecordSet) -> Result<Self> {
        let declared = records.iter().map(|r| r.declared_missing_count());

        let min = declared.clone().min().ok_or(PipelineError::EmptyAggregateRequest)?;
        let max = declared.clone().max().ok_or(PipelineError::EmptyAggregateRequest)?;
        let sum: f64 = declared.map(|d| d as f64).sum();

        Ok(Self {
            min,
            max,
            mean: sum / records.len() as f64,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregates {
    /// Count of individual missing numbers, derived from the gaps.
    pub total_missing: u64,
    /// Sum of the counts as written in the report.
    pub total_declared: u64,
    /// `None` when there are no records ("not applicable").
    pub declared: Option<DeclaredStats>,
    pub cumulative_declared: Vec<u64>,
    pub end_values: Vec<u64>,
    pub inconsistent_records: usize,
}

impl Aggregates {
    pub fn compute(records: &RecordSet) -> Self {
        Self {
            total_missing: total_missing(records),
            total_declared: records.iter().map(|r| r.declared_missing_count()).sum(),
            declared: DeclaredStats::compute(records).ok(),
            cumulative_declared: cumulative_declared(records),
            end_values: end_values(records),
            inconsistent_records: records.iter().filter(|r| !r.is_consistent()).count(),
        }
    }
}

pub fn total_missing(records: &RecordSet) -> u64 {
    records.iter().map(|r| r.computed_missing_count()).sum()
}

pub fn cumulative_declared(records: &RecordSet) -> Vec<u64> {
    records
        .iter()
        .scan(0u64, |running, record| {
            *running += record.declared_missing_count();
            Some(*running)
        })
        .collect()
}

pub fn end_values(records: &RecordSet) -> Vec<u64> {
    records.iter().map(|r| r.end()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use pretty_assertions::assert_eq;

    fn set(ranges: &[(u64, u64, u64)]) -> RecordSet {
        ranges
            .iter()
            .map(|&(start, end, declared)| Record::new(start, end, declared))
            .collect()
    }

    #[test]
    fn test_totals_use_computed_gap() {
        let records = set(&[(1, 5, 1)]);
        let aggregates = Aggregates::compute(&records);

        assert_eq!(aggregates.total_missing, 3);
        assert_eq!(aggregates.total_declared, 1);
        assert_eq!(aggregates.inconsistent_records, 1);
    }

    #[test]
    fn test_declared_stats() {
        let records = set(&[(10, 11, 0), (50, 53, 2), (100, 105, 4)]);
        let stats = DeclaredStats::compute(&records).unwrap();

        assert_eq!(stats.min, 0);
        assert_eq!(stats.max, 4);
        assert!((stats.mean - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_set_is_not_applicable() {
        let records = RecordSet::default();

        assert!(matches!(
            DeclaredStats::compute(&records),
            Err(PipelineError::EmptyAggregateRequest)
        ));

        let aggregates = Aggregates::compute(&records);
        assert_eq!(aggregates.declared, None);
        assert_eq!(aggregates.total_missing, 0);
        assert!(aggregates.cumulative_declared.is_empty());
    }

    #[test]
    fn test_cumulative_and_end_values() {
        let records = set(&[(10, 11, 0), (50, 53, 2), (100, 105, 4)]);

        assert_eq!(cumulative_declared(&records), vec![0, 2, 6]);
        assert_eq!(end_values(&records), vec![11, 53, 105]);
    }
}
