//! Collaborators around the status report
//!
//! - `git`: running `git status` and capturing its combined output
//! - `repository`: the working directory plus the output sink
//! - `workspace`: working directory resolution

pub mod git;
pub mod repository;
pub mod workspace;
