pub mod coerce;
mod parser;

use crate::ranking::CandidateRecord;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read candidate listings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid candidate CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads car listings from a CSV source whose first row is a header.
///
/// The source is read once. An unreadable source is the only failure; malformed
/// numeric cells become zero and an empty file yields no candidates.
pub struct CandidateImporter;

impl CandidateImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CandidateRecord>, ImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        debug!(path = %path.display(), "reading candidate listings");
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CandidateRecord>, ImportError> {
        let records = parser::parse_records(reader)?;
        debug!(rows = records.len(), "loaded candidate listings");
        Ok(records)
    }
}

/// Converts rows that were already split into fields (header excluded).
pub fn load_rows<I, R, S>(rows: I) -> Vec<CandidateRecord>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    rows.into_iter()
        .map(|row| parser::record_from_fields(row.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk unplugged"))
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CandidateImporter::from_path("/definitely/not/here/cars.csv")
            .expect_err("missing file fails");
        assert!(matches!(err, ImportError::Io(_)));
        assert!(err.to_string().starts_with("failed to read candidate listings"));
    }

    #[test]
    fn failing_reader_is_a_csv_error() {
        let err = CandidateImporter::from_reader(BrokenReader).expect_err("reader fails");
        assert!(matches!(err, ImportError::Csv(_)));
    }

    #[test]
    fn empty_source_has_no_candidates() {
        let records = CandidateImporter::from_reader(&b""[..]).expect("empty input is fine");
        assert!(records.is_empty());
    }

    #[test]
    fn load_rows_accepts_presplit_rows() {
        let rows = vec![
            vec!["VW", "Golf", "2014", "1.4", "Petrol", "Manual", "90000", "5", "3", "7000"],
            vec!["BMW", "320d", "2016", "2.0", "Diesel", "Automatic", "", "4", "x", "12500"],
        ];
        let records = load_rows(&rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].owner_count, 3);
        assert_eq!(records[1].mileage, 0.0);
        assert_eq!(records[1].owner_count, 0);
    }
}
