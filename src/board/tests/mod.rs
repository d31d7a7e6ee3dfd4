//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `attacks.rs` - Attacked squares on hand-built boards
//! - `moves.rs` - Pseudo-legal and legal move acceptance
//! - `proptest.rs` - Property-based tests

mod proptest;
