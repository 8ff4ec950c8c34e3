//! Request handler module
//!
//! Responsible for request routing dispatch and the greeting endpoint.

pub mod hello;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
