//! Utility functions

pub mod paths;

pub use paths::*;
