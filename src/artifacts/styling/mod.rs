//! Terminal styling primitives
//!
//! - `style`: SGR style values and the reset code
//! - `palette`: colours, icons and the fixed styles used by the status report
//! - `styled_text`: ordered (text, style) segments and their rendering
//! - `tables`: immutable lookups from status keyword and section key to style

pub mod palette;
pub mod style;
pub mod styled_text;
pub mod tables;
