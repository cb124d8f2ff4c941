use super::*;

#[test]
fn error_codes_are_distinct() {
    let errors = [
        PageError::EmptyTitles,
        PageError::LogLevel("loud".to_owned()),
        PageError::NoDocument,
        PageError::AlreadyStarted,
        PageError::Host("boom".to_owned()),
    ];
    for (i, a) in errors.iter().enumerate() {
        for (j, b) in errors.iter().enumerate() {
            if i != j {
                assert_ne!(a.error_code(), b.error_code());
            }
        }
    }
}

#[test]
fn config_error_wraps_serde_json() {
    let err: PageError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
    assert_eq!(err.error_code(), "E_CONFIG");
    assert!(err.to_string().starts_with("invalid page config:"));
}

#[test]
fn display_includes_detail() {
    assert_eq!(PageError::LogLevel("loud".to_owned()).to_string(), "unknown log level: loud");
    assert_eq!(PageError::Host("boom".to_owned()).to_string(), "host error: boom");
}
