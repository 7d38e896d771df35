//! Modsplit Parser Library
//!
//! Pattern-based function extraction and module assembly for splitting a
//! monolithic source file into per-group modules.

pub mod assembler;
pub mod extractor;

pub use assembler::assemble;
pub use extractor::{ExtractError, FunctionExtractor};
