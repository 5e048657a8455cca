//! Contract tests for type_classifier component
//!
//! These tests pin the documented scenarios for each public operation.

mod known_types_tests;
mod unique_type_tests;
