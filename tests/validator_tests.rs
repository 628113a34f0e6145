use webhook_source::config::{
    ValidationResult, YamlEventSourceParser, validate_event_source, validate_event_source_with,
};

fn payload(method: &str, endpoint: &str, port: &str) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "method": method,
        "endpoint": endpoint,
        "port": port,
    }))
    .unwrap()
}

#[test]
fn test_valid_configuration() {
    let result = validate_event_source(&payload("POST", "/hook", "8080"));

    assert_eq!(result, ValidationResult::valid());
    assert!(result.is_valid);
    assert_eq!(result.reason, "valid");
}

#[test]
fn test_unparseable_payload_is_reported_not_propagated() {
    let result = validate_event_source(b"{this is not json");

    assert!(!result.is_valid);
    assert!(result.reason.starts_with("failed to parse event source"));
}

#[test]
fn test_null_payload_is_empty_configuration() {
    let result = validate_event_source(b"null");

    assert!(!result.is_valid);
    assert_eq!(
        result.reason,
        "invalid event source, configuration must be non empty"
    );
}

#[test]
fn test_unknown_method() {
    let result = validate_event_source(&payload("FOO", "/x", "80"));

    assert!(!result.is_valid);
    assert_eq!(result.reason, "unknown HTTP method FOO");
}

#[test]
fn test_lowercase_method_is_rejected() {
    let result = validate_event_source(&payload("post", "/hook", "8080"));

    assert!(!result.is_valid);
    assert_eq!(result.reason, "unknown HTTP method post");
}

#[test]
fn test_empty_endpoint() {
    let result = validate_event_source(&payload("GET", "", "80"));

    assert!(!result.is_valid);
    assert_eq!(result.reason, "endpoint can't be empty");
}

#[test]
fn test_empty_port_checked_before_endpoint_prefix() {
    // Endpoint is missing its leading slash too, but the port-presence
    // check runs first and its reason wins.
    let result = validate_event_source(&payload("GET", "hook", ""));

    assert!(!result.is_valid);
    assert_eq!(result.reason, "port can't be empty");
}

#[test]
fn test_empty_port() {
    let result = validate_event_source(&payload("GET", "/hook", ""));

    assert!(!result.is_valid);
    assert_eq!(result.reason, "port can't be empty");
}

#[test]
fn test_endpoint_without_leading_slash() {
    let result = validate_event_source(&payload("GET", "hook", "80"));

    assert!(!result.is_valid);
    assert_eq!(result.reason, "endpoint must start with '/'");
}

#[test]
fn test_non_numeric_port() {
    let result = validate_event_source(&payload("GET", "/hook", "abc"));

    assert!(!result.is_valid);
    assert!(result.reason.contains("failed to parse server port abc"));
}

#[test]
fn test_negative_port_parses_as_integer() {
    // Only integer parseability is checked; range is a listener concern.
    let result = validate_event_source(&payload("GET", "/hook", "-1"));

    assert!(result.is_valid);
}

#[test]
fn test_method_checked_before_other_fields() {
    let result = validate_event_source(&payload("FOO", "", ""));

    assert_eq!(result.reason, "unknown HTTP method FOO");
}

#[test]
fn test_validation_is_idempotent() {
    let raw = payload("OPTIONS", "/probe", "9090");

    let first = validate_event_source(&raw);
    let second = validate_event_source(&raw);

    assert_eq!(first, second);
}

#[test]
fn test_yaml_payload_via_injected_parser() {
    let raw = b"method: GET\nendpoint: /hook\nport: \"8080\"\n";
    let result = validate_event_source_with(&YamlEventSourceParser, raw);

    assert_eq!(result, ValidationResult::valid());
}

#[test]
fn test_empty_yaml_document_is_empty_configuration() {
    let result = validate_event_source_with(&YamlEventSourceParser, b"");

    assert!(!result.is_valid);
    assert_eq!(
        result.reason,
        "invalid event source, configuration must be non empty"
    );
}
