//! Porcelain commands (user-facing operations)
//!
//! - `status`: colourised working tree status
pub mod status;
