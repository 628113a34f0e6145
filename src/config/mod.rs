//! Configuration module for webhook event sources.
//!
//! This module handles parsing and validation of webhook event-source
//! configurations. A configuration arrives as an opaque serialized payload
//! (JSON or YAML), is parsed into a [`WebhookConfig`] descriptor, and is
//! checked for structural well-formedness before a gateway would start
//! listening on it.
//!
//! # Examples
//!
//! Validating a raw payload:
//!
//! ```
//! use webhook_source::config::validate_event_source;
//!
//! let result = validate_event_source(
//!     br#"{"method": "POST", "endpoint": "/push", "port": "12000"}"#,
//! );
//! assert!(result.is_valid);
//! ```
//!
//! Validating a descriptor built programmatically:
//!
//! ```
//! use webhook_source::config::{WebhookConfig, validate_webhook};
//!
//! let config = WebhookConfig {
//!     method: "GET".to_string(),
//!     endpoint: "/hook".to_string(),
//!     port: "8080".to_string(),
//! };
//! assert!(validate_webhook(&config).is_ok());
//! ```
mod parser;
pub mod validator;

pub use parser::{
    EventSourceParser, JsonEventSourceParser, WebhookConfig, YamlEventSourceParser,
};
pub use validator::{
    ALLOWED_METHODS, ValidationError, ValidationResult, validate_event_source,
    validate_event_source_with, validate_webhook,
};
