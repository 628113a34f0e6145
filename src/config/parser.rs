use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Descriptor for a single webhook event source.
///
/// This structure describes the HTTP listener a gateway would expose for an
/// event source: the request method it accepts, the URL path it serves, and
/// the port it listens on. The port is carried as text because that is how
/// it arrives in user-supplied configuration; [`validate_webhook`] checks
/// that it parses as a decimal integer.
///
/// All fields default to the empty string when absent from the payload, so a
/// partially specified configuration is reported by the matching field check
/// rather than as a parse failure.
///
/// [`validate_webhook`]: crate::config::validate_webhook
///
/// # JSON Schema
///
/// ```json
/// {
///   "method": "POST",
///   "endpoint": "/push",
///   "port": "12000"
/// }
/// ```
///
/// # Examples
///
/// ```
/// use webhook_source::config::WebhookConfig;
///
/// let config = WebhookConfig {
///     method: "POST".to_string(),
///     endpoint: "/push".to_string(),
///     port: "12000".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// HTTP request method the listener accepts.
    #[serde(default)]
    pub method: String,

    /// URL path at which the listener accepts requests. Must start with `/`.
    #[serde(default)]
    pub endpoint: String,

    /// Listener port as decimal text, e.g. `"12000"`.
    #[serde(default)]
    pub port: String,
}

impl WebhookConfig {
    /// Loads a webhook configuration from a file path.
    ///
    /// This method reads the file at the specified path and parses its
    /// contents as a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The file cannot be read
    /// * The file contents are not valid JSON
    /// * The JSON does not conform to the expected schema
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigParse(format!("Failed to read config file: {}", e)))?;

        Self::parse_from_str(&content)
    }

    /// Parses a webhook configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The string is not valid JSON
    /// * The JSON does not conform to the expected schema
    pub fn parse_from_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::ConfigParse(format!("Failed to parse JSON config: {}", e)))
    }
}

/// Turns a raw serialized payload into a webhook descriptor.
///
/// The serialization format is a collaborator concern, so the validator takes
/// the parser as an injected dependency rather than committing to one format.
/// `Ok(None)` signals a payload that parsed to an absent configuration (for
/// example an explicit `null`), which the validator reports as an empty
/// event source.
#[cfg_attr(test, mockall::automock)]
pub trait EventSourceParser {
    /// Parses `raw` into a webhook descriptor, or `None` for an absent one.
    fn parse(&self, raw: &[u8]) -> Result<Option<WebhookConfig>>;
}

/// Parses event-source payloads carried as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEventSourceParser;

impl EventSourceParser for JsonEventSourceParser {
    fn parse(&self, raw: &[u8]) -> Result<Option<WebhookConfig>> {
        serde_json::from_slice(raw)
            .map_err(|e| Error::ConfigParse(format!("Failed to parse JSON config: {}", e)))
    }
}

/// Parses event-source payloads carried as YAML.
///
/// An empty document parses to `None`, the same as an explicit `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlEventSourceParser;

impl EventSourceParser for YamlEventSourceParser {
    fn parse(&self, raw: &[u8]) -> Result<Option<WebhookConfig>> {
        serde_yaml::from_slice(raw)
            .map_err(|e| Error::ConfigParse(format!("Failed to parse YAML config: {}", e)))
    }
}
