use webhook_source::validate_event_source;
use tracing_subscriber::{EnvFilter, fmt}; // Import tracing subscriber components

fn main() {
    // Initialize tracing subscriber
    // `with_env_filter` reads the RUST_LOG environment variable to set the log level.
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true) // Show module targets
        .init();

    tracing::info!("Starting validate demo");

    let payloads: [(&str, &[u8]); 4] = [
        ("valid", br#"{"method": "POST", "endpoint": "/push", "port": "12000"}"#),
        ("bad method", br#"{"method": "FOO", "endpoint": "/push", "port": "12000"}"#),
        ("relative endpoint", br#"{"method": "GET", "endpoint": "push", "port": "12000"}"#),
        ("garbage", b"{not a config"),
    ];

    for (label, raw) in payloads {
        let result = validate_event_source(raw);
        println!(
            "{:<18} -> isValid={} reason={:?}",
            label, result.is_valid, result.reason
        );
    }
}
