//! Core comment analyzer implementation
//!
//! This file contains the CommentAnalyzer which runs the sensitive-data
//! patterns over extracted HTML comments and collects findings.

use log::debug;

use crate::core::comments::extract_comments;
use crate::core::patterns::{CompiledPattern, COMPILED_PATTERNS};

/// Location label attached to every finding
pub const HTML_COMMENT_LOCATION: &str = "HTML Comment";

/// A comment flagged as containing sensitive-looking text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Trimmed comment text
    pub comment: String,
    /// Where the comment was found
    pub location: String,
}

impl Finding {
    fn in_html_comment(comment: &str) -> Self {
        Self {
            comment: comment.to_string(),
            location: HTML_COMMENT_LOCATION.to_string(),
        }
    }
}

/// Applies the fixed pattern list to HTML comments
pub struct CommentAnalyzer {
    patterns: &'static [CompiledPattern],
}

impl Default for CommentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentAnalyzer {
    /// Create an analyzer over the built-in patterns
    pub fn new() -> Self {
        Self {
            patterns: COMPILED_PATTERNS.as_slice(),
        }
    }

    /// Extract comments from markup and analyze them
    pub fn analyze_html(&self, html_content: &str) -> Vec<Finding> {
        let comments = extract_comments(html_content);
        self.analyze_comments(&comments)
    }

    /// Produce at most one finding per comment, in input order.
    ///
    /// Patterns are tried in order and the first hit wins; comments that match
    /// nothing are skipped.
    pub fn analyze_comments<S: AsRef<str>>(&self, comments: &[S]) -> Vec<Finding> {
        let mut findings = Vec::new();

        for comment in comments {
            let comment = comment.as_ref().trim();
            if let Some(pattern) = self.patterns.iter().find(|p| p.regex.is_match(comment)) {
                debug!("Comment matched pattern '{}'", pattern.name);
                findings.push(Finding::in_html_comment(comment));
            }
        }

        debug!(
            "{} of {} comment(s) flagged as sensitive",
            findings.len(),
            comments.len()
        );
        findings
    }
}
