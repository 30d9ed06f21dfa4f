//! Dataset input: column sniffing, parsing, and range filtering.

use crate::error::{ModelError, ModelResult};
use std::path::Path;

/// One accepted dataset row: boundary conditions for a single solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetRow {
    pub t_source_c: f64,
    pub t_sink_c: f64,
}

/// Plausibility ranges for dataset temperatures, exclusive on both ends.
/// Rows outside these ranges are dropped before solving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterRanges {
    pub source_c: (f64, f64),
    pub sink_c: (f64, f64),
}

impl Default for FilterRanges {
    fn default() -> Self {
        Self {
            source_c: (0.0, 80.0),
            sink_c: (20.0, 120.0),
        }
    }
}

impl FilterRanges {
    pub fn accepts(&self, row: &DatasetRow) -> bool {
        row.t_source_c > self.source_c.0
            && row.t_source_c < self.source_c.1
            && row.t_sink_c > self.sink_c.0
            && row.t_sink_c < self.sink_c.1
    }
}

/// Keywords identifying the source-temperature column, in priority order.
pub const SOURCE_KEYWORDS: [&str; 3] = ["source", "t_in", "inlet"];
/// Keywords identifying the sink-temperature column, in priority order.
pub const SINK_KEYWORDS: [&str; 3] = ["sink", "t_out", "outlet"];

/// Find the first column whose header contains one of the keywords,
/// case-insensitively. Keyword priority wins over column order: all columns
/// are checked for the first keyword before the second keyword is tried.
pub fn sniff_column(headers: &[String], keywords: &[&str]) -> Option<usize> {
    for key in keywords {
        for (i, header) in headers.iter().enumerate() {
            if header.to_lowercase().contains(key) {
                return Some(i);
            }
        }
    }
    None
}

/// Read a CSV dataset, sniff the temperature columns, and return the rows
/// that parse as numbers and pass the plausibility filter. Malformed rows
/// are skipped, not errors.
pub fn read_dataset(path: &Path, filters: &FilterRanges) -> ModelResult<Vec<DatasetRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();

    let source_col =
        sniff_column(&headers, &SOURCE_KEYWORDS).ok_or_else(|| ModelError::Dataset {
            message: "no recognizable source temperature column".to_string(),
        })?;
    let sink_col = sniff_column(&headers, &SINK_KEYWORDS).ok_or_else(|| ModelError::Dataset {
        message: "no recognizable sink temperature column".to_string(),
    })?;

    tracing::info!(
        source_col = %headers[source_col],
        sink_col = %headers[sink_col],
        "matched dataset columns"
    );

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        let parsed = record
            .get(source_col)
            .and_then(|s| s.parse::<f64>().ok())
            .zip(record.get(sink_col).and_then(|s| s.parse::<f64>().ok()));

        let Some((t_source_c, t_sink_c)) = parsed else {
            skipped += 1;
            continue;
        };
        if !t_source_c.is_finite() || !t_sink_c.is_finite() {
            skipped += 1;
            continue;
        }

        let row = DatasetRow {
            t_source_c,
            t_sink_c,
        };
        if filters.accepts(&row) {
            rows.push(row);
        } else {
            skipped += 1;
        }
    }

    tracing::debug!(accepted = rows.len(), skipped, "dataset rows filtered");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sniff_matches_case_insensitive_substring() {
        let h = headers(&["Timestamp", "Heat Source Temp", "Sink_T"]);
        assert_eq!(sniff_column(&h, &SOURCE_KEYWORDS), Some(1));
        assert_eq!(sniff_column(&h, &SINK_KEYWORDS), Some(2));
    }

    #[test]
    fn sniff_keyword_priority_beats_column_order() {
        // "inlet" appears in column 0 but "source" is the higher-priority
        // keyword and matches column 2
        let h = headers(&["Ambient inlet", "Timestamp", "source T"]);
        assert_eq!(sniff_column(&h, &SOURCE_KEYWORDS), Some(2));
    }

    #[test]
    fn sniff_returns_none_without_match() {
        let h = headers(&["a", "b"]);
        assert_eq!(sniff_column(&h, &SOURCE_KEYWORDS), None);
    }

    #[test]
    fn filter_ranges_are_exclusive() {
        let f = FilterRanges::default();
        let ok = DatasetRow {
            t_source_c: 20.0,
            t_sink_c: 80.0,
        };
        assert!(f.accepts(&ok));
        // Boundary values are excluded
        assert!(!f.accepts(&DatasetRow {
            t_source_c: 0.0,
            t_sink_c: 80.0
        }));
        assert!(!f.accepts(&DatasetRow {
            t_source_c: 80.0,
            t_sink_c: 80.0
        }));
        assert!(!f.accepts(&DatasetRow {
            t_source_c: 20.0,
            t_sink_c: 120.0
        }));
        assert!(!f.accepts(&DatasetRow {
            t_source_c: 20.0,
            t_sink_c: 20.0
        }));
    }

    #[test]
    fn read_dataset_filters_and_skips_malformed() {
        let path = std::env::temp_dir().join("hc_model_dataset_test.csv");
        fs::write(
            &path,
            "time,Source Temp C,Sink Temp C\n\
             1,20.0,80.0\n\
             2,not_a_number,80.0\n\
             3,-5.0,80.0\n\
             4,25.0,130.0\n\
             5,30.0,90.0\n",
        )
        .unwrap();

        let rows = read_dataset(&path, &FilterRanges::default()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            DatasetRow {
                t_source_c: 20.0,
                t_sink_c: 80.0
            }
        );
        let _ = fs::remove_file(path);
    }

    #[test]
    fn read_dataset_without_columns_is_an_error() {
        let path = std::env::temp_dir().join("hc_model_dataset_nocols_test.csv");
        fs::write(&path, "a,b\n1,2\n").unwrap();
        let err = read_dataset(&path, &FilterRanges::default()).unwrap_err();
        assert!(matches!(err, ModelError::Dataset { .. }));
        let _ = fs::remove_file(path);
    }
}
