use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Required CSV columns
// ---------------------------------------------------------------------------

pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_BOOSTER: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal load-time failure. The process never opens a window after one of
/// these.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("opening {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("reading CSV row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}, column '{column}': '{value}' is not {expected}")]
    BadField {
        row: usize,
        column: &'static str,
        value: String,
        expected: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load launch records from a CSV file.
///
/// Expected layout: header row containing at least the four required columns
/// (`Launch Site`, `Payload Mass (kg)`, `Booster Version Category`, `class`).
/// Extra columns are ignored. A header-only file yields an empty dataset.
pub fn load_csv(path: &Path) -> Result<LaunchDataset, DataLoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| DataLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| DataLoadError::Row { row: 0, source })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let column = |name: &'static str| -> Result<usize, DataLoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DataLoadError::MissingColumn(name))
    };

    let site_idx = column(COL_SITE)?;
    let payload_idx = column(COL_PAYLOAD)?;
    let booster_idx = column(COL_BOOSTER)?;
    let class_idx = column(COL_CLASS)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.map_err(|source| DataLoadError::Row {
            row: row_no,
            source,
        })?;

        let cell = |idx: usize| row.get(idx).unwrap_or("").trim();

        let payload_mass_kg = parse_f64(cell(payload_idx), row_no, COL_PAYLOAD)?;
        let raw_class = parse_u8(cell(class_idx), row_no, COL_CLASS)?;
        let outcome =
            Outcome::from_class(raw_class).ok_or_else(|| DataLoadError::BadField {
                row: row_no,
                column: COL_CLASS,
                value: raw_class.to_string(),
                expected: "0 or 1",
            })?;

        records.push(LaunchRecord {
            site: cell(site_idx).to_string(),
            payload_mass_kg,
            booster_category: cell(booster_idx).to_string(),
            outcome,
        });
    }

    Ok(LaunchDataset::from_records(records))
}

fn parse_f64(s: &str, row: usize, column: &'static str) -> Result<f64, DataLoadError> {
    s.parse::<f64>().map_err(|_| DataLoadError::BadField {
        row,
        column,
        value: s.to_string(),
        expected: "a number",
    })
}

fn parse_u8(s: &str, row: usize, column: &'static str) -> Result<u8, DataLoadError> {
    s.parse::<u8>().map_err(|_| DataLoadError::BadField {
        row,
        column,
        value: s.to_string(),
        expected: "0 or 1",
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::model::{PayloadRange, SiteFilter};

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp csv");
        file
    }

    #[test]
    fn loads_well_formed_file() {
        let file = write_csv(
            "Flight Number,Launch Site,Payload Mass (kg),Booster Version Category,class\n\
             1,CCAFS LC-40,500.0,v1.0,1\n\
             2,KSC LC-39A,9000.0,FT,0\n",
        );
        let ds = load_csv(file.path()).expect("load");
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].site, "CCAFS LC-40");
        assert_eq!(ds.records[0].payload_mass_kg, 500.0);
        assert_eq!(ds.records[0].outcome, Outcome::Success);
        assert_eq!(ds.records[1].outcome, Outcome::Failure);
        assert_eq!(ds.payload_bounds(), PayloadRange::new(500.0, 9000.0));
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
    }

    #[test]
    fn missing_column_is_rejected() {
        let file = write_csv(
            "Launch Site,Payload Mass (kg),class\n\
             CCAFS LC-40,500.0,1\n",
        );
        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::MissingColumn(COL_BOOSTER)
        ));
    }

    #[test]
    fn missing_file_is_rejected() {
        let err = load_csv(Path::new("does-not-exist.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::Open { .. }));
    }

    #[test]
    fn bad_payload_cell_is_rejected() {
        let file = write_csv(
            "Launch Site,Payload Mass (kg),Booster Version Category,class\n\
             CCAFS LC-40,heavy,v1.0,1\n",
        );
        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::BadField {
                row: 0,
                column: COL_PAYLOAD,
                ..
            }
        ));
    }

    #[test]
    fn out_of_range_class_is_rejected() {
        let file = write_csv(
            "Launch Site,Payload Mass (kg),Booster Version Category,class\n\
             CCAFS LC-40,500.0,v1.0,2\n",
        );
        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::BadField {
                column: COL_CLASS,
                ..
            }
        ));
    }

    #[test]
    fn header_only_file_is_an_empty_dataset() {
        let file = write_csv(
            "Launch Site,Payload Mass (kg),Booster Version Category,class\n",
        );
        let ds = load_csv(file.path()).expect("load");
        assert!(ds.is_empty());
        assert_eq!(ds.payload_bounds(), PayloadRange::axis());
        assert_eq!(ds.site_options(), vec![crate::data::model::SiteOption {
            label: "All Sites".to_string(),
            filter: SiteFilter::All,
        }]);
    }
}
