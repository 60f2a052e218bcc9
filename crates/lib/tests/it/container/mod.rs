//! Container integration tests
//!
//! This module tests the container data model: Value conversions, Mapping
//! and Record behaviour, Key parsing and ContainerKind classification.

mod mapping_tests;
mod value_tests;
