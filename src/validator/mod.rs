//! Validation module

pub mod layout;

use crate::config::PackageConfig;
use crate::error::Result;

pub fn validate_project(config: &PackageConfig) -> Result<()> {
    layout::validate_layout(config)
}
