use spring_courier::{CourierError, UnknownService, WrapError};

#[test]
fn wrap_error_messages() {
    assert_eq!(WrapError::EmptyAddress.to_string(), "Address cannot be empty.");
    let err = WrapError::TotalLimitExceeded {
        length: 120,
        total_limit: 105,
    };
    assert_eq!(
        err.to_string(),
        "Address exceeds the total hard limit. Please shorten the address."
    );
}

#[test]
fn courier_error_is_transparent_for_address_errors() {
    let err = CourierError::from(WrapError::EmptyAddress);
    assert_eq!(err.to_string(), "Address cannot be empty.");
    assert!(err.is_address_error());

    let err = CourierError::from(UnknownService::new("XX"));
    assert_eq!(err.to_string(), "Service key 'XX' not found.");
    assert!(!err.is_address_error());
}

#[test]
fn http_error_status() {
    let err = CourierError::Http {
        status: 502,
        body: "Bad Gateway".into(),
    };
    assert_eq!(err.status_code(), Some(502));
    assert_eq!(err.to_string(), "HTTP error: 502");
    assert_eq!(CourierError::MissingLabel.status_code(), None);
}

#[test]
fn parse_error_keeps_body() {
    match CourierError::parse("expected value", "oops") {
        CourierError::Parse { message, body } => {
            assert_eq!(message, "expected value");
            assert_eq!(body.as_deref(), Some("oops"));
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}
