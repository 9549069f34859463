//! Status report data structures and algorithms
//!
//! - `status`: section tracking and line classification
//! - `styling`: styles, palette, lookup tables and styled text

pub mod status;
pub mod styling;
