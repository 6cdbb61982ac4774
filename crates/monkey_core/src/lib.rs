//! monkey_core: Source loading for the monkey toolchain.
//!
//! Scanners operate on already-decoded characters. This crate owns the
//! decoding step so that invalid input is rejected before a scanner exists.

pub mod source;

pub use source::{read_source_file, SourceError, SourceText};
