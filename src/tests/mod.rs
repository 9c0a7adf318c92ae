// src/tests/mod.rs

//! Tests for _abxlib_.
//!
//! Tests are placed at `src/tests/`, inside the `abxlib`. This is a
//! reasonable trade-off of separation and access: tests placed at top-level
//! path `tests/` do not have crate-internal visibility, and several tests
//! here assert on crate-internal counters.

pub mod common;

pub mod item_tests;
pub mod logcat_tests;
pub mod syslog_tests;
