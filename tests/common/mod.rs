//! Shared constants and helpers for integration tests

#![allow(dead_code)]

/// Scratch directory available to tests
pub const DATA_TEMP_DIR: &str = "data/temp/";

/// Read-only fixture directory
pub const DATA_TESTS_DIR: &str = "data/tests/";

/// Whether the test process runs as root, where permission probes always pass
pub fn is_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}
