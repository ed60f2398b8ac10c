//! Command-line interface module
//!
//! Provides the command registry, dispatch and help rendering.

pub mod help;
pub mod registry;

pub use registry::{Command, Handler, VoidCli};
