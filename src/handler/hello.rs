//! Greeting endpoint module
//!
//! Builds the two-line greeting body that echoes the requested URL.

use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Greeting text written on the first body line.
const GREETING: &str = "Golang Workshop @ HAW";

/// Build the greeting response for `/hello`.
///
/// `url` is the request target (path plus query), echoed back verbatim.
pub fn greet(url: &str) -> Response<Full<Bytes>> {
    http::build_greeting_response(greeting_body(url))
}

/// Two lines, each newline-terminated: the greeting and the echoed URL.
fn greeting_body(url: &str) -> String {
    format!("Hello, {GREETING}!\nURL = {url}\n")
}
