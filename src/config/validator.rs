use crate::config::{EventSourceParser, JsonEventSourceParser, WebhookConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker included in the reason string when the payload cannot be parsed.
pub const ERR_EVENT_SOURCE_PARSE_FAILED: &str = "failed to parse event source";

/// Marker included in the reason string for an absent configuration.
pub const ERR_INVALID_EVENT_SOURCE: &str = "invalid event source";

/// HTTP methods a webhook event source may listen for.
///
/// Matching is exact and case-sensitive against these canonical tokens.
pub const ALLOWED_METHODS: [&str; 9] = [
    "HEAD", "PUT", "CONNECT", "DELETE", "GET", "OPTIONS", "PATCH", "POST", "TRACE",
];

/// A structural check that a webhook descriptor failed.
///
/// The `Display` text of each variant is the exact reason string surfaced to
/// the user through [`ValidationResult::reason`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The payload parsed to an absent configuration.
    #[error("{}, configuration must be non empty", ERR_INVALID_EVENT_SOURCE)]
    EmptyConfiguration,

    /// The method is not one of [`ALLOWED_METHODS`].
    #[error("unknown HTTP method {0}")]
    UnknownMethod(String),

    /// The endpoint path is empty.
    #[error("endpoint can't be empty")]
    EmptyEndpoint,

    /// The port is empty.
    #[error("port can't be empty")]
    EmptyPort,

    /// The endpoint path does not start with `/`.
    #[error("endpoint must start with '/'")]
    EndpointNotAbsolute,

    /// The port is not a decimal integer.
    #[error("failed to parse server port {port}. err: {source}")]
    MalformedPort {
        port: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Outcome of validating an event-source configuration.
///
/// Every detectable problem is reported through this value rather than an
/// error channel, so a registration layer can surface `reason` verbatim in a
/// status field. Serializes with camelCase keys (`isValid`, `reason`).
///
/// # Examples
///
/// ```
/// use webhook_source::validate_event_source;
///
/// let result = validate_event_source(
///     br#"{"method": "POST", "endpoint": "/push", "port": "12000"}"#,
/// );
/// assert!(result.is_valid);
/// assert_eq!(result.reason, "valid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the configuration passed every check.
    pub is_valid: bool,

    /// `"valid"` on success; a diagnostic describing the first failed check
    /// otherwise.
    pub reason: String,
}

impl ValidationResult {
    /// Result for a configuration that passed every check.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            reason: "valid".to_string(),
        }
    }

    /// Result for a configuration that failed a check.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            reason: reason.into(),
        }
    }
}

/// Validates a raw webhook event-source payload carried as JSON.
///
/// Parse failures are reported through the returned result, never
/// propagated. See [`validate_event_source_with`] for other formats.
///
/// This function is instrumented with `tracing`.
#[tracing::instrument(skip(raw), fields(payload_len = raw.len()))]
pub fn validate_event_source(raw: &[u8]) -> ValidationResult {
    validate_event_source_with(&JsonEventSourceParser, raw)
}

/// Validates a raw webhook event-source payload using the given parser.
///
/// Runs the payload through `parser`, then applies the structural checks of
/// [`validate_webhook`] to the descriptor. All failure modes, including a
/// payload the parser rejects, are folded into the returned
/// [`ValidationResult`].
pub fn validate_event_source_with<P: EventSourceParser>(
    parser: &P,
    raw: &[u8],
) -> ValidationResult {
    let config = match parser.parse(raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Event source payload failed to parse");
            return ValidationResult::invalid(format!(
                "{}. err: {}",
                ERR_EVENT_SOURCE_PARSE_FAILED, e
            ));
        }
    };

    match validate_parsed(config.as_ref()) {
        Ok(()) => {
            tracing::debug!("Event source configuration is valid");
            ValidationResult::valid()
        }
        Err(e) => {
            tracing::debug!(reason = %e, "Event source configuration is invalid");
            ValidationResult::invalid(e.to_string())
        }
    }
}

/// Validates a parsed configuration that may be absent.
fn validate_parsed(config: Option<&WebhookConfig>) -> Result<(), ValidationError> {
    match config {
        Some(config) => validate_webhook(config),
        None => Err(ValidationError::EmptyConfiguration),
    }
}

/// Runs the structural checks on a webhook descriptor.
///
/// Checks run in a fixed order and stop at the first failure, so a
/// configuration with several bad fields reports exactly one reason. The
/// port-presence check deliberately runs before the endpoint-prefix check to
/// keep that reporting order stable.
pub fn validate_webhook(config: &WebhookConfig) -> Result<(), ValidationError> {
    if !ALLOWED_METHODS.contains(&config.method.as_str()) {
        return Err(ValidationError::UnknownMethod(config.method.clone()));
    }

    if config.endpoint.is_empty() {
        return Err(ValidationError::EmptyEndpoint);
    }
    if config.port.is_empty() {
        return Err(ValidationError::EmptyPort);
    }

    if !config.endpoint.starts_with('/') {
        return Err(ValidationError::EndpointNotAbsolute);
    }

    config
        .port
        .parse::<i64>()
        .map_err(|e| ValidationError::MalformedPort {
            port: config.port.clone(),
            source: e,
        })?;

    Ok(())
}
