use super::coerce::{coerce_float, coerce_int};
use crate::ranking::CandidateRecord;
use std::io::Read;

/// Positional layout of a listing row.
const BRAND: usize = 0;
const MODEL: usize = 1;
const YEAR: usize = 2;
const ENGINE_SIZE: usize = 3;
const FUEL_TYPE: usize = 4;
const TRANSMISSION: usize = 5;
const MILEAGE: usize = 6;
const DOORS: usize = 7;
const OWNER_COUNT: usize = 8;
const PRICE: usize = 9;

/// Reads every row after the header. Rows may be short or long; missing
/// fields read as empty and invalid UTF-8 is replaced rather than rejected.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<CandidateRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.byte_records() {
        let row = row?;
        let fields: Vec<String> = row
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned())
            .collect();
        records.push(record_from_fields(&fields));
    }

    Ok(records)
}

pub(crate) fn record_from_fields<S: AsRef<str>>(fields: &[S]) -> CandidateRecord {
    CandidateRecord {
        brand: field(fields, BRAND).to_string(),
        model: field(fields, MODEL).to_string(),
        year: field(fields, YEAR).to_string(),
        engine_size: coerce_float(field(fields, ENGINE_SIZE)),
        fuel_type: field(fields, FUEL_TYPE).to_string(),
        transmission: field(fields, TRANSMISSION).to_string(),
        mileage: coerce_float(field(fields, MILEAGE)),
        doors: coerce_int(field(fields, DOORS)),
        owner_count: coerce_int(field(fields, OWNER_COUNT)),
        price: coerce_float(field(fields, PRICE)),
    }
}

fn field<S: AsRef<str>>(fields: &[S], index: usize) -> &str {
    fields.get(index).map(|value| value.as_ref()).unwrap_or("")
}
