// file: src/extractor/mod.rs
// description: range extraction module exports
// reference: internal module structure

pub mod patterns;
pub mod range;

pub use range::RangeExtractor;
