//! Utility modules for the comment analyzer
//!
//! Input acquisition and report output live here, at the edges of the
//! pipeline.

pub mod output_formatter;
pub mod source_loader;
