//! Shared utilities.

pub mod window;
