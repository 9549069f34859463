//! Colourised `git status`
//!
//! - `areas`: process invocation, directory resolution and the output sink
//! - `artifacts`: styling primitives and the status line classifier
//! - `commands`: the status report loop

pub mod areas;
pub mod artifacts;
pub mod commands;
