use saw_ranker::import::{load_rows, CandidateImporter, ImportError};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/cars.csv")
}

#[test]
fn importer_reads_fixture_in_file_order() {
    let records = CandidateImporter::from_path(fixture_path()).expect("fixture imports");

    assert_eq!(records.len(), 12);
    let models: Vec<&str> = records.iter().map(|record| record.model.as_str()).collect();
    assert_eq!(models.first(), Some(&"Corolla"));
    assert_eq!(models.last(), Some(&"Yaris"));
    assert_eq!(models[4], "320d");
}

#[test]
fn importer_coerces_malformed_numbers_to_zero() {
    let records = CandidateImporter::from_path(fixture_path()).expect("fixture imports");
    let bmw = records
        .iter()
        .find(|record| record.brand == "BMW")
        .expect("bmw row present");

    assert_eq!(bmw.mileage, 0.0);
    assert_eq!(bmw.owner_count, 0);
    assert_eq!(bmw.price, 12_500.0);
    assert_eq!(bmw.fuel_type, "Diesel");
}

#[test]
fn importer_passes_identifying_fields_through() {
    let csv = "Brand,Model,Year,Engine_Size,Fuel_Type,Transmission,Mileage,Doors,Owner_Count,Price\n\
,Mystery, 2010 ,1.2,,Manual,1000,3,1,500\n";
    let records = CandidateImporter::from_reader(csv.as_bytes()).expect("csv imports");

    assert_eq!(records[0].brand, "");
    assert_eq!(records[0].year, " 2010 ");
    assert_eq!(records[0].fuel_type, "");
}

#[test]
fn importer_reports_unreadable_sources() {
    let err = CandidateImporter::from_path(fixture_path().with_file_name("missing.csv"))
        .expect_err("missing fixture fails");
    assert!(matches!(err, ImportError::Io(_)));
}

#[test]
fn load_rows_matches_csv_import() {
    let rows = [["Fiat", "Panda", "2012", "1.1", "Petrol", "Manual", "70000", "5", "2", "3500"]];
    let from_rows = load_rows(&rows);

    let csv = "header\nFiat,Panda,2012,1.1,Petrol,Manual,70000,5,2,3500\n";
    let from_csv = CandidateImporter::from_reader(csv.as_bytes()).expect("csv imports");

    assert_eq!(from_rows, from_csv);
}
