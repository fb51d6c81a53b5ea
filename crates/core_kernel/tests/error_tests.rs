//! Unit tests for core error types

use core_kernel::{CoreError, PortError, TemporalError};

#[test]
fn core_error_wraps_temporal() {
    let err: CoreError = TemporalError::InvalidDate("junk".to_string()).into();
    assert!(err.to_string().contains("junk"));
}

#[test]
fn core_error_wraps_port() {
    let err: CoreError = PortError::conflict("duplicate VIN").into();
    assert!(err.to_string().contains("duplicate VIN"));
}

#[test]
fn port_error_predicates() {
    assert!(PortError::not_found("Owner", "OWN-1").is_not_found());
    assert!(PortError::conflict("racing insert").is_conflict());
    assert!(!PortError::validation("bad year").is_conflict());
    assert!(!PortError::internal("boom").is_not_found());
}

#[test]
fn constructor_helpers_format_messages() {
    let err = CoreError::validation("year out of range");
    assert_eq!(err.to_string(), "Validation error: year out of range");

    let err = CoreError::not_found("Car CAR-42");
    assert_eq!(err.to_string(), "Not found: Car CAR-42");
}
