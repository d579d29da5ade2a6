// ShowLog - app/mod.rs
//
// Application layer: input classification and the interactive session.
// Dependencies: core layer.
// Must NOT depend on: platform specifics.

pub mod command;
pub mod session;
