// file: src/models/record.rs
// description: typed range record and the ordered record set
// reference: internal data structures

use serde::Serialize;
use std::ops::Index;

/// A reported range with its gap already expanded.
///
/// `start` and `end` are the known-good document numbers around the gap, both
/// exclusive. `missing_numbers` is derived from them once, at construction, and
/// the fields are private so it can never drift from `(start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    start: u64,
    end: u64,
    declared_missing_count: u64,
    missing_numbers: Vec<u64>,
}

impl Record {
    pub fn new(start: u64, end: u64, declared_missing_count: u64) -> Self {
        Self {
            start,
            end,
            declared_missing_count,
            missing_numbers: missing_between(start, end),
        }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// The count as written in the report. Never reconciled with the gap.
    pub fn declared_missing_count(&self) -> u64 {
        self.declared_missing_count
    }

    pub fn missing_numbers(&self) -> &[u64] {
        &self.missing_numbers
    }

    pub fn computed_missing_count(&self) -> u64 {
        self.missing_numbers.len() as u64
    }

    /// Whether the declared count agrees with the actual gap length.
    pub fn is_consistent(&self) -> bool {
        self.declared_missing_count == self.computed_missing_count()
    }

    pub fn has_gap(&self) -> bool {
        !self.missing_numbers.is_empty()
    }
}

/// Every integer strictly between `start` and `end`, ascending.
pub fn missing_between(start: u64, end: u64) -> Vec<u64> {
    match start.checked_add(1) {
        Some(first) if first < end => (first..end).collect(),
        _ => Vec::new(),
    }
}

/// Records in order of appearance in the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Index<usize> for RecordSet {
    type Output = Record;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}
