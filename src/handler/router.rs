//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: logs the request target and
//! dispatches on its path.

use crate::handler::hello;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let uri = req.uri();
    let url = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);

    logger::log_request(&url);

    Ok(route_request(uri.path(), &url))
}

/// Dispatch on the request path.
///
/// `path` is the path component alone; `url` is path plus query, exactly as
/// received. Any method on `/hello` gets the greeting; everything else gets
/// the default not-found response.
fn route_request(path: &str, url: &str) -> Response<Full<Bytes>> {
    if path == "/hello" {
        hello::greet(url)
    } else {
        http::build_404_response()
    }
}
