//! Integration tests for the demo subcommands.
use agriconnect::cli::demo::{handle_demo_route_command, handle_demo_validate_command};
use agriconnect::settings::Settings;

/// Settings which suppress log output during tests
fn quiet_settings() -> Settings {
    Settings {
        log_level: "off".to_string(),
    }
}

/// An integration test exercising the demo subcommands.
///
/// NB: The handlers share the process-wide logger, so they are exercised from a single test.
#[test]
fn test_demo_handlers() {
    handle_demo_validate_command("pakistan", Some(quiet_settings())).unwrap();
    handle_demo_route_command("pakistan", "Lahore", "Karachi", Some(quiet_settings())).unwrap();

    // Unknown demos are an error
    assert!(handle_demo_validate_command("atlantis", Some(quiet_settings())).is_err());
}
