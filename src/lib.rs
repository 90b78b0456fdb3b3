//! vscan HTML comment analyzer
//!
//! Retrieves an HTML document from a local path or a URL, extracts its
//! comment nodes, and flags comments that look like they leak credentials,
//! connection strings or API keys.

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::config::{AnalyzerConfig, LogConfig, Settings};
pub use crate::core::analyzer::{CommentAnalyzer, Finding, HTML_COMMENT_LOCATION};
pub use crate::core::comments::extract_comments;
pub use crate::error::AnalysisError;
pub use crate::utils::source_loader::{is_url, FileLoader, HttpLoader, InputSource, SourceLoader};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze markup and return the flagged comments
///
/// This is a convenience function for simple use cases.
pub fn analyze_html(html_content: &str) -> Vec<Finding> {
    CommentAnalyzer::new().analyze_html(html_content)
}

/// Command-line application functionality
pub mod app {
    use log::{error, info};

    use crate::config::AnalyzerConfig;
    use crate::core::analyzer::CommentAnalyzer;
    use crate::error::AnalysisError;
    use crate::utils::output_formatter::write_results;
    use crate::utils::source_loader::{FileLoader, HttpLoader, InputSource, SourceLoader};

    /// How a run ended
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum RunOutcome {
        /// Content was analyzed and the report (or "nothing found") emitted
        Reported { findings: usize },
        /// The document could not be retrieved
        NoContent,
        /// Findings existed but the report file could not be written
        WriteFailed,
    }

    impl RunOutcome {
        /// Retrieval or report writing failed
        pub fn is_failure(&self) -> bool {
            !matches!(self, RunOutcome::Reported { .. })
        }
    }

    /// Run the analyzer with the default HTTP and file loaders
    ///
    /// The HTTP client is only built when the input is a URL.
    pub fn run(config: &AnalyzerConfig) -> RunOutcome {
        run_with(config, &HttpLoader::new(), &FileLoader)
    }

    /// Run the analyzer with explicit loaders for remote and local input
    ///
    /// Errors are logged where they happen and folded into the outcome.
    pub fn run_with(
        config: &AnalyzerConfig,
        http_loader: &dyn SourceLoader,
        file_loader: &dyn SourceLoader,
    ) -> RunOutcome {
        let loaded = match InputSource::classify(&config.input) {
            InputSource::Url(url) => {
                info!("Analyzing URL: {}", config.input);
                http_loader.fetch(url.as_str())
            }
            InputSource::Path(_) => {
                info!("Analyzing file: {}", config.input);
                file_loader.fetch(&config.input)
            }
        };

        let html_content = match loaded {
            Ok(content) if !content.is_empty() => content,
            Ok(_) => {
                error!("Failed to retrieve HTML content.");
                return RunOutcome::NoContent;
            }
            Err(e) => {
                log_source_error(&e);
                error!("Failed to retrieve HTML content.");
                return RunOutcome::NoContent;
            }
        };

        let findings = CommentAnalyzer::new().analyze_html(&html_content);

        match write_results(&findings, config.output.as_deref()) {
            Ok(()) => RunOutcome::Reported {
                findings: findings.len(),
            },
            Err(_) => RunOutcome::WriteFailed,
        }
    }

    fn log_source_error(err: &AnalysisError) {
        match err {
            AnalysisError::Fetch { .. } => error!("Error fetching URL: {}", err),
            AnalysisError::FileNotFound { path } => error!("File not found: {}", path.display()),
            AnalysisError::Read { source, .. } => error!("Error reading file: {}", source),
            AnalysisError::Write { .. } => error!("{}", err),
        }
    }

}
