use super::*;

#[test]
fn validation_is_flagged() {
    assert!(ApiError::validation("pick a room").is_validation());
    assert!(!ApiError::Network("offline".to_owned()).is_validation());
    assert!(!ApiError::Server { status: 500 }.is_validation());
    assert!(!ApiError::Unavailable.is_validation());
}

#[test]
fn validation_message_displays_verbatim() {
    let err = ApiError::validation("Please select a room design");
    assert_eq!(err.to_string(), "Please select a room design");
}

#[test]
fn server_error_names_status() {
    let err = ApiError::Server { status: 502 };
    assert_eq!(err.to_string(), "server responded with status 502");
}
