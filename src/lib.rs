/*!
 # Webhook Source

 A Rust library for validating webhook event-source configurations in an
 event gateway.

 ## Overview

 A webhook event source describes an HTTP listener a gateway exposes to
 receive inbound events: the request method, the URL path, and the port.
 Before the gateway starts listening, the user-supplied configuration must
 be structurally well formed. This crate provides that guard:

 - Parse an opaque serialized payload into a [`WebhookConfig`] descriptor
 - Check the HTTP method against the allowed set
 - Check the endpoint path is non-empty and starts with `/`
 - Check the port is non-empty decimal text

 Every failure mode, including an unparseable payload, is reported through
 the returned [`ValidationResult`] rather than an error channel, so a
 registration layer can surface the `reason` string verbatim in a status
 field.

 ## Basic Usage

 ```
 use webhook_source::validate_event_source;

 let result = validate_event_source(
     br#"{"method": "POST", "endpoint": "/push", "port": "12000"}"#,
 );
 assert!(result.is_valid);
 assert_eq!(result.reason, "valid");

 let result = validate_event_source(
     br#"{"method": "FOO", "endpoint": "/push", "port": "12000"}"#,
 );
 assert!(!result.is_valid);
 assert_eq!(result.reason, "unknown HTTP method FOO");
 ```

 ## Features

 - **Pluggable parsing**: the payload format is an injected
   [`EventSourceParser`]; JSON and YAML parsers are provided
 - **Error-as-value reporting**: one uniform result shape for callers
 - **Stateless**: safe to call concurrently, no retained state between calls

 ## License

 This project is licensed under the terms in the LICENSE file.
*/

pub mod config;
pub mod error;

pub use config::{
    EventSourceParser, JsonEventSourceParser, ValidationError, ValidationResult, WebhookConfig,
    YamlEventSourceParser, validate_event_source, validate_event_source_with, validate_webhook,
};
pub use error::{Error, Result};
