//! HTTP response building module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build the 200 greeting response.
///
/// Uses hyper's default status and headers; the body is the only thing the
/// handler sets.
pub fn build_greeting_response(body: String) -> Response<Full<Bytes>> {
    Response::new(Full::new(Bytes::from(body)))
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            crate::logger::log_response_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    #[test]
    fn test_greeting_response_defaults() {
        let resp = build_greeting_response("Hello\n".to_string());
        assert_eq!(resp.status(), StatusCode::OK);
        // No explicit headers: content type is whatever hyper supplies
        assert!(resp.headers().get("Content-Type").is_none());
    }

    #[test]
    fn test_404_response() {
        let resp = build_404_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/plain"
        );
    }
}
