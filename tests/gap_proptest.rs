//! Property-based tests for gap expansion and flattening
//!
//! - a range's gap is exactly the open interval between its bounds
//! - the flattened export has one row per missing number, in record order
//! - regrouping the flattened rows restores each range's gap
//! - the text extractor recovers every generated block unchanged

use proptest::prelude::*;
use std::collections::BTreeMap;
use pulanota::exporter::flatten;
use pulanota::pipeline::aggregator::total_missing;
use pulanota::{RangeExtractor, Record, RecordSet};

/// Bounds kept small so gaps stay cheap to materialise
fn range_strategy() -> impl Strategy<Value = (u64, u64, u64)> {
    (0u64..1_000_000, 0u64..300, 0u64..300)
        .prop_map(|(start, width, declared)| (start, start + width, declared))
}

fn record_set_strategy() -> impl Strategy<Value = Vec<(u64, u64, u64)>> {
    prop::collection::vec(range_strategy(), 0..8)
}

fn to_set(ranges: &[(u64, u64, u64)]) -> RecordSet {
    ranges
        .iter()
        .map(|&(start, end, declared)| Record::new(start, end, declared))
        .collect()
}

proptest! {
    #[test]
    fn gap_is_open_interval((start, end, declared) in range_strategy()) {
        let record = Record::new(start, end, declared);
        let gap = record.missing_numbers();

        if end > start + 1 {
            prop_assert_eq!(gap.len() as u64, end - start - 1);
            prop_assert_eq!(gap[0], start + 1);
            prop_assert_eq!(gap[gap.len() - 1], end - 1);
            prop_assert!(gap.windows(2).all(|w| w[0] + 1 == w[1]));
        } else {
            prop_assert!(gap.is_empty());
        }
    }

    #[test]
    fn inverted_bounds_have_no_gap(end in 0u64..1_000, back in 0u64..1_000) {
        let record = Record::new(end + back, end, 0);
        prop_assert!(record.missing_numbers().is_empty());
    }

    #[test]
    fn flatten_row_count_matches_total(ranges in record_set_strategy()) {
        let records = to_set(&ranges);
        let rows = flatten(&records);

        prop_assert_eq!(rows.len() as u64, total_missing(&records));

        // grouped by record in order, ascending inside each group
        prop_assert!(rows.windows(2).all(|w| {
            w[0].record_index < w[1].record_index
                || (w[0].record_index == w[1].record_index
                    && w[0].missing_number < w[1].missing_number)
        }), "rows not grouped by record in ascending order");

        for row in &rows {
            let record = &records[row.record_index];
            prop_assert_eq!(row.start, record.start());
            prop_assert_eq!(row.end, record.end());
            prop_assert_eq!(row.declared_missing_count, record.declared_missing_count());
        }
    }

    #[test]
    fn regrouping_flattened_rows_restores_gaps(ranges in record_set_strategy()) {
        let records = to_set(&ranges);

        // ranges may repeat, so group by record position as well as its fields
        let mut regrouped: BTreeMap<(usize, u64, u64, u64), Vec<u64>> = BTreeMap::new();
        for row in flatten(&records) {
            regrouped
                .entry((row.record_index, row.start, row.end, row.declared_missing_count))
                .or_default()
                .push(row.missing_number);
        }

        for (index, record) in records.iter().enumerate() {
            let key = (index, record.start(), record.end(), record.declared_missing_count());
            let restored = regrouped.remove(&key).unwrap_or_default();
            prop_assert_eq!(restored.as_slice(), record.missing_numbers());
        }
        prop_assert!(regrouped.is_empty());
    }

    #[test]
    fn extractor_recovers_generated_blocks(ranges in record_set_strategy()) {
        let text: String = ranges
            .iter()
            .map(|(start, end, declared)| {
                format!(
                    "Inicio da Nota Fiscal ....: {start}\n  Fim da Nota Fiscal .......: {end}\nQtde. de Notas Faltantes no Levantamento: {declared}\n\n"
                )
            })
            .collect();

        let matches = RangeExtractor::new().extract(&text);
        prop_assert_eq!(matches.len(), ranges.len());
        for (raw, (start, end, declared)) in matches.iter().zip(&ranges) {
            prop_assert_eq!(&raw.start_text, &start.to_string());
            prop_assert_eq!(&raw.end_text, &end.to_string());
            prop_assert_eq!(&raw.declared_missing_text, &declared.to_string());
        }
    }
}
