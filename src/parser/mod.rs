//! Parsing modules for the extension manifest

pub mod manifest;

pub use manifest::{parse_manifest, parse_manifest_from_file, resolve_version};
