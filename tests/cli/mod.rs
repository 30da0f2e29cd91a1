//! CLI integration tests
//!
//! Verifies output formats, ordering, identity selection, and file filters
//! by running the built binary.

pub mod filter_tests;
