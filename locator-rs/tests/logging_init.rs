//! Global subscriber installation. Own test binary: the subscriber is process-wide.

use locator_rs::{logging, LocatorConfig, LocatorError};

#[test]
fn second_init_is_a_logging_error() {
    logging::init("info").unwrap();

    match logging::init("debug") {
        Err(LocatorError::Logging(_)) => {}
        _ => panic!("expected Logging"),
    }
    match logging::init_from(&LocatorConfig::default()) {
        Err(LocatorError::Logging(_)) => {}
        _ => panic!("expected Logging"),
    }
}
