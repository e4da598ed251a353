//! Coerces battery answers to the 1–5 Likert domain and drops incomplete
//! respondents. SUS requires all 10 items of a battery; a row missing any
//! of the 20 combined answers is unscoreable and excluded, not imputed.

use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::analyzers::columns::BatteryColumns;
use crate::dataset::{Cell, Dataset};

/// Produces a cleaned copy of the dataset suitable for scoring.
///
/// Non-numeric answers become missing, out-of-range answers are reset to
/// missing (counted per column), and any row with a missing battery
/// answer is dropped.
///
/// # Errors
///
/// Fails when the input has no rows, or when no row survives the
/// completeness filter.
pub fn clean_dataset(dataset: &Dataset, columns: &BatteryColumns) -> Result<Dataset> {
    if dataset.is_empty() {
        bail!("no survey data available");
    }

    let mut cleaned = dataset.clone();

    for name in columns.all() {
        let Some(idx) = cleaned.column_index(name) else {
            continue;
        };

        let mut invalid = 0usize;
        for row in cleaned.rows_mut() {
            let cell = &mut row[idx];
            match cell {
                Cell::Number(v) if (1.0..=5.0).contains(v) => {}
                Cell::Number(_) => {
                    invalid += 1;
                    *cell = Cell::Missing;
                }
                Cell::Text(_) => *cell = Cell::Missing,
                Cell::Missing => {}
            }
        }

        if invalid > 0 {
            warn!(
                column = %name,
                invalid,
                "answers outside the 1-5 range were discarded"
            );
        }
    }

    let battery_indices: Vec<usize> = columns
        .all()
        .filter_map(|name| cleaned.column_index(name))
        .collect();

    let before = cleaned.len();
    cleaned.retain_rows(|row| battery_indices.iter().all(|&i| !row[i].is_missing()));
    let removed = before - cleaned.len();

    if removed > 0 {
        info!(removed, "incomplete responses dropped");
    }

    if cleaned.is_empty() {
        bail!("no complete responses remain after data cleaning");
    }

    info!(respondents = cleaned.len(), "dataset validated");
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::columns::classify_columns;

    fn dataset(csv: &str) -> (Dataset, BatteryColumns) {
        let ds = Dataset::from_csv_bytes(csv.as_bytes()).unwrap();
        let columns = classify_columns(ds.columns());
        (ds, columns)
    }

    #[test]
    fn test_keeps_complete_rows() {
        let (ds, cols) = dataset("G01,M01\n5,1\n3,4\n");
        let cleaned = clean_dataset(&ds, &cols).unwrap();
        assert_eq!(cleaned.len(), 2);
    }

    #[test]
    fn test_out_of_range_answer_drops_whole_row() {
        // A 0 or 6 in either battery excludes the respondent entirely.
        let (ds, cols) = dataset("G01,M01\n0,3\n5,6\n4,4\n");
        let cleaned = clean_dataset(&ds, &cols).unwrap();
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned.rows()[0][0], Cell::Number(4.0));
    }

    #[test]
    fn test_text_answer_becomes_missing_and_drops_row() {
        let (ds, cols) = dataset("G01,M01\nmolt,3\n2,2\n");
        let cleaned = clean_dataset(&ds, &cols).unwrap();
        assert_eq!(cleaned.len(), 1);
    }

    #[test]
    fn test_non_battery_columns_untouched() {
        let (ds, cols) = dataset("Edat:,G01,M01\nabc,5,5\n");
        let cleaned = clean_dataset(&ds, &cols).unwrap();
        assert_eq!(cleaned.rows()[0][0], Cell::Text("abc".to_string()));
    }

    #[test]
    fn test_empty_dataset_is_fatal() {
        let (ds, cols) = dataset("G01,M01\n");
        assert!(clean_dataset(&ds, &cols).is_err());
    }

    #[test]
    fn test_zero_survivors_is_fatal() {
        let (ds, cols) = dataset("G01,M01\n9,1\n,2\n");
        let err = clean_dataset(&ds, &cols).unwrap_err();
        assert!(err.to_string().contains("no complete responses"));
    }

    #[test]
    fn test_input_dataset_not_mutated() {
        let (ds, cols) = dataset("G01,M01\n7,1\n2,2\n");
        let _ = clean_dataset(&ds, &cols).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows()[0][0], Cell::Number(7.0));
    }
}
