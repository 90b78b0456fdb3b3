//! Integration tests for the HTML comment analyzer
//!
//! These exercise the whole pipeline against real files and a throwaway
//! local HTTP server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use reqwest::blocking::Client;

use vscan_html_comment_analyzer::app::{run_with, RunOutcome};
use vscan_html_comment_analyzer::{
    analyze_html, AnalysisError, AnalyzerConfig, FileLoader, HttpLoader, SourceLoader,
};

/// Answer exactly one HTTP request with the given status line and body.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read local address");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}/page.html", addr)
}

fn local_http_loader() -> HttpLoader {
    let client = Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client");
    HttpLoader::with_client(client)
}

#[test]
fn test_fetch_ok() {
    let url = serve_once("200 OK", "<html><!-- secret = s3cr3t --></html>");
    let content = local_http_loader().fetch(&url).expect("fetch");
    assert_eq!(content, "<html><!-- secret = s3cr3t --></html>");
}

#[test]
fn test_fetch_404_is_fetch_error() {
    let url = serve_once("404 Not Found", "");
    match local_http_loader().fetch(&url) {
        Err(AnalysisError::Fetch { url: failed, .. }) => assert_eq!(failed, url),
        other => panic!("expected Fetch error, got {:?}", other),
    }
}

#[test]
fn test_fetch_unreachable_is_fetch_error() {
    // Bind then drop to get a port nobody is listening on
    let addr = TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .expect("Failed to reserve port");
    let url = format!("http://{}/", addr);

    assert!(matches!(
        local_http_loader().fetch(&url),
        Err(AnalysisError::Fetch { .. })
    ));
}

#[test]
fn test_url_404_produces_no_report() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let report = dir.path().join("results.txt");
    let url = serve_once("404 Not Found", "");
    let config = AnalyzerConfig::new(url).with_output(&report);

    let outcome = run_with(&config, &local_http_loader(), &FileLoader);

    assert_eq!(outcome, RunOutcome::NoContent);
    assert!(!report.exists());
}

#[test]
fn test_url_pipeline_writes_report() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let report = dir.path().join("results.txt");
    let url = serve_once(
        "200 OK",
        "<html><body><!-- api_key=XYZ --><p>hi</p><!-- database=prod --></body></html>",
    );
    let config = AnalyzerConfig::new(url).with_output(&report);

    let outcome = run_with(&config, &local_http_loader(), &FileLoader);

    assert_eq!(outcome, RunOutcome::Reported { findings: 2 });
    let written = std::fs::read_to_string(&report).expect("Failed to read report");
    assert_eq!(
        written,
        "Findings:\n\
         - Location: HTML Comment\n  Comment: api_key=XYZ\n\
         - Location: HTML Comment\n  Comment: database=prod\n"
    );
}

#[test]
fn test_file_pipeline_writes_report() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let page = dir.path().join("index.html");
    let report = dir.path().join("results.txt");
    std::fs::write(
        &page,
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Staging</title>
  <!-- TODO: remove before go-live -->
  <!-- jdbc:mysql://localhost:3306/db -->
</head>
<body>
  <script>var fake = "<!-- password=notacomment -->";</script>
  <!--
     password: abc123
  -->
</body>
</html>"#,
    )
    .expect("Failed to write page");

    let config = AnalyzerConfig::new(page.to_string_lossy()).with_output(&report);
    let outcome = run_with(&config, &HttpLoader::new(), &FileLoader);

    assert_eq!(outcome, RunOutcome::Reported { findings: 2 });
    let written = std::fs::read_to_string(&report).expect("Failed to read report");
    assert_eq!(
        written,
        "Findings:\n\
         - Location: HTML Comment\n  Comment: jdbc:mysql://localhost:3306/db\n\
         - Location: HTML Comment\n  Comment: password: abc123\n"
    );
}

#[test]
fn test_missing_file_is_no_content() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = AnalyzerConfig::new(dir.path().join("missing.html").to_string_lossy());

    let outcome = run_with(&config, &HttpLoader::new(), &FileLoader);

    assert_eq!(outcome, RunOutcome::NoContent);
}

#[test]
fn test_unwritable_report_is_write_failed() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let page = dir.path().join("index.html");
    std::fs::write(&page, "<!-- token: abc -->").expect("Failed to write page");
    let config = AnalyzerConfig::new(page.to_string_lossy())
        .with_output(dir.path().join("missing_dir").join("out.txt"));

    let outcome = run_with(&config, &HttpLoader::new(), &FileLoader);

    assert_eq!(outcome, RunOutcome::WriteFailed);
    assert!(outcome.is_failure());
}

#[test]
fn test_analyze_html_examples() {
    let one = analyze_html("<!-- password: abc123 -->");
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].comment, "password: abc123");
    assert_eq!(one[0].location, "HTML Comment");

    assert!(analyze_html("<!-- just a note -->").is_empty());

    let jdbc = analyze_html("<p>x</p><!-- jdbc:mysql://localhost:3306/db -->");
    assert_eq!(jdbc.len(), 1);

    let two = analyze_html("<!-- api_key=XYZ --><!-- database=prod -->");
    let comments: Vec<_> = two.iter().map(|f| f.comment.as_str()).collect();
    assert_eq!(comments, vec!["api_key=XYZ", "database=prod"]);
}
