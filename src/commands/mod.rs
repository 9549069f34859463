//! Command implementations
//!
//! Only user-facing `porcelain` commands exist; each one is an `impl` block
//! on `Repository`.

pub mod porcelain;
