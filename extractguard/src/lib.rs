// extractguard/src/lib.rs
//! # ExtractGuard CLI Application
//!
//! Terminal front end for `extractguard-core`: scores a model's extraction
//! against its source document, aggregates batches of earlier results, and
//! shows the effective scoring configuration.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
