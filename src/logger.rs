//! Logger module
//!
//! Provides logging utilities for the HTTP server:
//! - Server lifecycle logging
//! - Per-request access logging
//! - Error logging
//!
//! Info lines go to stdout, error lines to stderr. Each event is written
//! as a single line so concurrent requests never interleave mid-line.

use chrono::Local;
use std::net::SocketAddr;

/// Timestamp prefix shared by all log lines.
fn timestamp() -> String {
    Local::now().format("%Y/%m/%d %H:%M:%S").to_string()
}

fn write_info(message: &str) {
    println!("{} {message}", timestamp());
}

fn write_error(message: &str) {
    eprintln!("{} {message}", timestamp());
}

/// Print the startup instruction naming the endpoint to connect to.
pub fn log_server_start(port: u16) {
    println!("please connect to localhost:{port}/hello");
}

/// Log a received request's URL (path plus query, exactly as received).
pub fn log_request(url: &str) {
    write_info(url);
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_response_build_error(status: &str, err: &hyper::http::Error) {
    write_error(&format!("[ERROR] Failed to build {status} response: {err}"));
}

pub fn log_accept_error(err: &std::io::Error) {
    write_error(&format!("[ERROR] Failed to accept connection: {err}"));
}

pub fn log_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    write_error(&format!("[ERROR] Failed to bind {addr}: {err}"));
}
