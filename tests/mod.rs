//! Integration tests for Marquee
//!
//! Tests are organized by component:
//! - tmdb_test: TMDB API client tests
//! - query_test: Store + query client flows against a mock TMDB
//! - cli_test: Argument parsing and command exit codes
//! - ui_test: Full-screen rendering with TestBackend

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
