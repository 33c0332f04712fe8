//! Version checking for tracked toolchain targets
//!
//! For every configured target this layer fetches the upstream page, extracts
//! the latest published version and compares it with the installed one.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Driver    │────▶│   Checker   │────▶│   Recipe    │
//! │  (fan-out)  │     │  (compare)  │     │   (fetch)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │                   │
//!        ▼                   ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Outcome   │     │  Reporter   │     │   Recipes   │
//! │ (exit code) │     │   (lines)   │     │(pages, gh..)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`driver`]: Checks one or all targets and decides the outcome
//! - [`checker`]: Compares one target against its recipe
//! - [`recipe`]: Recipe trait and name-keyed recipe table
//! - [`recipes`]: Concrete recipes for every built-in target
//! - [`http`]: Shared page fetcher
//! - [`html`]: Element and text helpers for extractors
//! - [`outcome`]: Three-way run outcome and exit code
//! - [`report`]: Reporter port for user-facing lines
//! - [`target`]: Target and CheckResult
//! - [`error`]: Recipe error taxonomy

pub mod checker;
pub mod driver;
pub mod error;
pub mod html;
pub mod http;
pub mod outcome;
pub mod recipe;
pub mod recipes;
pub mod report;
pub mod target;
