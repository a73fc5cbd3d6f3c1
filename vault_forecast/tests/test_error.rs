use std::io;
use vault_forecast::{ForecastError, ForecastParams, ModelKind};
use vault_math::MathError;

#[test]
fn test_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    assert!(matches!(ForecastError::from(io_error), ForecastError::Io(_)));

    let math_error = MathError::DecimalsOutOfRange(400);
    assert!(matches!(
        ForecastError::from(math_error),
        ForecastError::Math(MathError::DecimalsOutOfRange(400))
    ));

    let json_error = serde_json::from_str::<ForecastParams>("{").unwrap_err();
    assert!(matches!(ForecastError::from(json_error), ForecastError::Json(_)));
}

#[test]
fn test_error_display() {
    let error = ForecastError::InvalidParameter("alpha must be in (0, 1]".to_string());
    let error_string = format!("{}", error);
    assert!(error_string.contains("alpha must be in (0, 1]"));

    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let error_string = ForecastError::from(io_error).to_string();
    assert!(error_string.contains("IO error"));
    assert!(error_string.contains("permission denied"));

    let error_string = ForecastError::from(MathError::DecimalsOutOfRange(400)).to_string();
    assert_eq!(error_string, "Math error: Decimal exponent 400 overflows f64");
}

#[test]
fn test_unknown_model_name() {
    match "garch".parse::<ModelKind>() {
        Err(ForecastError::InvalidParameter(msg)) => assert!(msg.contains("garch")),
        other => panic!("Expected InvalidParameter, got {:?}", other),
    }
}
