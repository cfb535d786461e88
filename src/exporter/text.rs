// file: src/exporter/text.rs
// description: newline-joined plain-text lists for download

use crate::error::Result;
use crate::models::RecordSet;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn missing_numbers_list(records: &RecordSet) -> String {
    join_lines(records.iter().flat_map(|r| r.missing_numbers().iter().copied()))
}

pub fn end_values_list(records: &RecordSet) -> String {
    join_lines(records.iter().map(|r| r.end()))
}

fn join_lines(values: impl Iterator<Item = u64>) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join("\n")
}

pub fn write_list(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)?;
    info!("Wrote text list to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use tempfile::tempdir;

    #[test]
    fn test_lists() {
        let records: RecordSet = vec![Record::new(10, 11, 0), Record::new(50, 53, 2)]
            .into_iter()
            .collect();

        assert_eq!(missing_numbers_list(&records), "51\n52");
        assert_eq!(end_values_list(&records), "11\n53");
        assert_eq!(missing_numbers_list(&RecordSet::default()), "");
    }

    #[test]
    fn test_write_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("faltantes.txt");
        write_list(&path, "1\n2").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "1\n2");
    }
}
