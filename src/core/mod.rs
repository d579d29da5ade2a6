// ShowLog - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, tracing.
// Must NOT depend on: platform, app, or any I/O crate directly.

pub mod filter;
pub mod model;
pub mod parser;
