//! Console output helpers.

pub mod progress;
