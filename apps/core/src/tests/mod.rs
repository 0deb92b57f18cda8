//! Test Module
//!
//! Cross-module test suite for the ShelfBot core.
//!
//! ## Test Categories
//! - `brain_tests`: tokenizer, scorer, and matcher behavior
//! - `catalog_tests`: catalog loading and validation
//! - `integration_tests`: full matching flow over the shipped catalog
