//! Test utilities and helper functions for the sitezip test suite

use std::io::{Cursor, Read};

use futures::StreamExt;
use mockito::{Mock, Server, ServerGuard};
use sitezip::HarvestStream;
use zip::ZipArchive;

/// Sets up a mock HTTP server with predefined responses
#[allow(dead_code)]
pub async fn setup_mock_server() -> ServerGuard {
    Server::new_async().await
}

/// Creates a mock endpoint that returns HTML content
#[allow(dead_code)]
pub async fn create_html_mock(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns arbitrary resource bytes
#[allow(dead_code)]
pub async fn create_resource_mock(
    server: &mut Server,
    path: &str,
    content_type: &str,
    body: &[u8],
) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", content_type)
        .with_body(body)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns a redirect
#[allow(dead_code)]
pub async fn create_redirect_mock(server: &mut Server, from: &str, to: &str) -> Mock {
    server
        .mock("GET", from)
        .with_status(301)
        .with_header("location", to)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error
#[allow(dead_code)]
pub async fn create_error_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// Helper to create test URLs
#[allow(dead_code)]
pub fn test_url(server: &Server, path: &str) -> String {
    format!("{}{}", server.url(), path)
}

/// Drains a harvest stream into the finished archive bytes
#[allow(dead_code)]
pub async fn collect_archive(harvest: HarvestStream) -> Vec<u8> {
    let mut stream = harvest.stream;
    let mut bytes = Vec::new();
    while let Some(chunk) = stream.next().await {
        bytes.extend_from_slice(&chunk.expect("archive stream chunk"));
    }
    bytes
}

/// Lists entry names in a finished archive, in archive order
#[allow(dead_code)]
pub fn archive_names(bytes: &[u8]) -> Vec<String> {
    let archive = ZipArchive::new(Cursor::new(bytes.to_vec())).expect("valid zip archive");
    archive.file_names().map(str::to_string).collect()
}

/// Reports how one entry was stored: (method, compressed size, raw size)
#[allow(dead_code)]
pub fn archive_entry_stats(bytes: &[u8], name: &str) -> (zip::CompressionMethod, u64, u64) {
    let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).expect("valid zip archive");
    let file = archive.by_name(name).expect("entry present in archive");
    (file.compression(), file.compressed_size(), file.size())
}

/// Reads one entry out of a finished archive
#[allow(dead_code)]
pub fn archive_entry(bytes: &[u8], name: &str) -> Vec<u8> {
    let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).expect("valid zip archive");
    let mut file = archive.by_name(name).expect("entry present in archive");
    let mut out = Vec::new();
    file.read_to_end(&mut out).expect("readable entry");
    out
}
