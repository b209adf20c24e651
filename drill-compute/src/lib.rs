//! Exact symbolic arithmetic over the variables `a`, `b`, `x`, and `y`.
//!
//! See the [`symbolic`] module for an overview.

pub mod primitive;
pub mod symbolic;
