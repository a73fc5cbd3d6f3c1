use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;
use vault_forecast::{DataLoader, ForecastError, PricePoint, Snapshot};

#[test]
fn test_price_points_from_reader() {
    let csv = "timestamp,price\n1000,1.5\n2000,1.75\n";
    let points = DataLoader::price_points_from_reader(csv.as_bytes()).unwrap();

    assert_eq!(
        points,
        vec![PricePoint::new(1000, 1.5), PricePoint::new(2000, 1.75)]
    );
}

#[test]
fn test_columns_matched_by_header() {
    let csv = "price,timestamp\n3.0,10\n";
    let points = DataLoader::price_points_from_reader(csv.as_bytes()).unwrap();
    assert_eq!(points, vec![PricePoint::new(10, 3.0)]);
}

#[test]
fn test_empty_file_yields_empty_series() {
    let points = DataLoader::price_points_from_reader("timestamp,price\n".as_bytes()).unwrap();
    assert!(points.is_empty());
}

#[test]
fn test_rejects_negative_price() {
    let csv = "timestamp,price\n1000,1.5\n2000,-4.0\n";
    let err = DataLoader::price_points_from_reader(csv.as_bytes()).unwrap_err();

    match err {
        ForecastError::DataError(msg) => {
            assert!(msg.contains("Record 2"));
            assert!(msg.contains("price"));
        }
        other => panic!("Expected DataError, got {:?}", other),
    }
}

#[test]
fn test_rejects_malformed_number() {
    let csv = "timestamp,price\nyesterday,1.5\n";
    assert!(matches!(
        DataLoader::price_points_from_reader(csv.as_bytes()),
        Err(ForecastError::Csv(_))
    ));
}

#[test]
fn test_snapshots_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "updatedAt,pricePerShare").unwrap();
    writeln!(file, "100,1.01").unwrap();
    writeln!(file, "200,1.02").unwrap();

    let snapshots = DataLoader::snapshots_from_csv(file.path()).unwrap();
    assert_eq!(
        snapshots,
        vec![Snapshot::new(1.01, 100), Snapshot::new(1.02, 200)]
    );
}

#[test]
fn test_snapshot_rejects_nan() {
    let csv = "updatedAt,pricePerShare\n100,NaN\n";
    assert!(matches!(
        DataLoader::snapshots_from_reader(csv.as_bytes()),
        Err(ForecastError::DataError(_))
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        DataLoader::price_points_from_csv("/definitely/not/here.csv"),
        Err(ForecastError::Io(_))
    ));
}
