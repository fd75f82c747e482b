//! Global installation. Kept in its own binary since a subscriber can only
//! be installed once per process.

use formgate_log::{Config, LogError};

#[test]
fn second_init_fails() {
    formgate_log::init(&Config::default()).unwrap();
    tracing::warn!("installed");
    assert!(matches!(
        formgate_log::init(&Config::default()),
        Err(LogError::Init(_))
    ));
}
