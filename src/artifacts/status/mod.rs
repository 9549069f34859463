//! Status output classification
//!
//! ## Components
//!
//! - `section`: the section context threaded from line to line
//! - `classifier`: the ordered rule table deciding each line's kind and style

pub mod classifier;
pub mod section;
