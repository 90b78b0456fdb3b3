//! Pattern definitions for the comment analyzer
//!
//! The list of sensitive-data patterns is fixed at build time. Patterns are
//! tried in declaration order and compiled once, case-insensitively.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

/// A named sensitive-data pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternDef {
    /// Short name used in debug logging
    pub name: &'static str,
    /// Regular expression source
    pub regex: &'static str,
}

/// Built-in patterns, in match order.
pub const SENSITIVE_PATTERNS: &[PatternDef] = &[
    // Credentials and tokens assigned inline
    PatternDef {
        name: "credential_assignment",
        regex: r"(password|pwd|secret|key|token)\s*[:=]\s*[\w\d\-_]+",
    },
    // Database connection strings
    PatternDef {
        name: "jdbc_mysql",
        regex: r"jdbc:mysql://[\w\d.:/]+",
    },
    PatternDef {
        name: "api_key_assignment",
        regex: r"api_key\s*=\s*[\w\d\-]+",
    },
    PatternDef {
        name: "database_assignment",
        regex: r"database\s*=\s*[\w\d\-]+",
    },
];

/// A compiled pattern paired with its name
#[derive(Debug)]
pub struct CompiledPattern {
    pub name: &'static str,
    pub regex: Regex,
}

/// Helper function to compile a pattern with case-insensitive matching
pub fn compile_pattern(pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::error!("Error compiling pattern: {}", e);
            None
        }
    }
}

/// Compile the built-in pattern list, preserving order
pub fn precompile_patterns() -> Vec<CompiledPattern> {
    SENSITIVE_PATTERNS
        .iter()
        .filter_map(|def| {
            compile_pattern(def.regex).map(|regex| CompiledPattern {
                name: def.name,
                regex,
            })
        })
        .collect()
}

lazy_static! {
    /// Precompiled patterns available globally
    pub static ref COMPILED_PATTERNS: Vec<CompiledPattern> = precompile_patterns();
}

/// Return the name of the first pattern found anywhere in `text`.
pub fn first_match(text: &str) -> Option<&'static str> {
    COMPILED_PATTERNS
        .iter()
        .find(|pattern| pattern.regex.is_match(text))
        .map(|pattern| pattern.name)
}
