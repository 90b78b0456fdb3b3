//! HTML comment extraction
//!
//! Markup is parsed with html5ever into a `scraper` tree, which never fails
//! on malformed input. Comments are picked out by node kind, so comment-like
//! text inside `<script>` blocks or attribute values is not reported.

use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use log::debug;
use scraper::{Html, Node};

/// Parse a full document with scripting disabled, so `<noscript>` content is
/// parsed as markup and its comments become comment nodes.
fn parse_static_document(html_content: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    driver::parse_document(Html::new_document(), opts).one(html_content)
}

/// Extract the text of every comment node, in document order.
///
/// Surrounding whitespace is trimmed from each comment.
pub fn extract_comments(html_content: &str) -> Vec<String> {
    let document = parse_static_document(html_content);

    let comments: Vec<String> = document
        .tree
        .root()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Comment(comment) => Some(comment.trim().to_string()),
            _ => None,
        })
        .collect();

    debug!("Extracted {} comment(s) from document", comments.len());
    comments
}
