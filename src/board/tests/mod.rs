//! Unit tests for the board module.
//!
//! Tests are organised by component: domain values, column grouping, the
//! task cache and the controller.

mod domain_tests;
