use log::{debug, info};
use std::io::Read;
use std::path::Path;

use crate::error::StatsError;
use crate::stats::Record;

/// Reads benchmark records from CSV. The header row names the fields; a `framework` column is
/// required and every other column becomes a field. Empty cells are left out of the record.
pub fn load_records<R: Read>(reader: R) -> Result<Vec<Record>, StatsError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    if !reader.headers()?.iter().any(|h| h == Record::FRAMEWORK) {
        return Err(StatsError::MissingColumn(Record::FRAMEWORK.to_string()));
    }

    let records = reader.deserialize::<Record>().collect::<Result<Vec<_>, _>>()?;

    debug!("loaded {} records", records.len());
    Ok(records)
}

pub fn load_records_from_path(path: impl AsRef<Path>) -> Result<Vec<Record>, StatsError> {
    let path = path.as_ref();
    info!("reading records from {}", path.display());
    let file = std::fs::File::open(path)?;
    load_records(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Value;
    use crate::stats_table::render_table;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const SAMPLE: &str = "\
framework,createRows,size
angular,2354,38.26
inferno, 1800 ,8.9
svelte,2167,
";

    #[test]
    fn infers_field_types() {
        let records = load_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], Record::new("angular").with("createRows", 2354).with("size", 38.26));
        assert_eq!(records[1].get("createRows"), Some(&Value::Int(1800)));
    }

    #[test]
    fn empty_cells_become_missing_fields() {
        let mut records = load_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records[2].get("size"), None);
        let err = render_table(&mut records, "size", "kb").unwrap_err();
        assert!(matches!(err, StatsError::MissingField { ref framework, .. } if framework == "svelte"));
    }

    #[test]
    fn framework_column_is_required() {
        let err = load_records("name,size\na,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, StatsError::MissingColumn(ref column) if column == "framework"));
        assert_eq!(err.to_string(), "CSV header has no `framework` column");
    }

    #[test]
    fn non_finite_cells_fail_to_render_without_panicking() {
        let mut csv = String::from("framework,v\n");
        for i in 0..64 {
            if i % 3 == 0 {
                csv.push_str(&format!("f{},NaN\n", i));
            } else {
                csv.push_str(&format!("f{},{}\n", i, 64 - i));
            }
        }
        let mut records = load_records(csv.as_bytes()).unwrap();
        assert!(matches!(records[0].get("v"), Some(Value::Float(v)) if v.is_nan()));

        let err = render_table(&mut records, "v", "").unwrap_err();
        assert!(matches!(err, StatsError::NonFiniteValue { ref key, .. } if key == "v"));
        assert_eq!(records[1].framework, "f1");

        let mut infinite = load_records("framework,v\na,1\nb,inf\n".as_bytes()).unwrap();
        assert!(matches!(
            render_table(&mut infinite, "v", ""),
            Err(StatsError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn ragged_rows_are_csv_errors() {
        let err = load_records("framework,size\na,1,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, StatsError::Csv(_)));
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let records = load_records_from_path(file.path()).unwrap();
        assert_eq!(records[1].framework, "inferno");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records_from_path(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, StatsError::Io(_)));
    }
}
