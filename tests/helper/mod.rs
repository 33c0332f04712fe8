//! Shared test utilities

#![allow(dead_code)]

pub mod recipe;
pub mod reporter;

pub use recipe::{StubRecipe, create_test_checker};
pub use reporter::CollectingReporter;
