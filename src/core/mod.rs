//! Core module for comment analysis
//!
//! This module contains comment extraction, the fixed pattern list, and the
//! analyzer that turns matching comments into findings.

pub mod analyzer;
pub mod comments;
pub mod patterns;
