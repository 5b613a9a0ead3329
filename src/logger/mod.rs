//! Logger module
//!
//! Lifecycle and error logging for the demo server. Per-request access
//! logging exists behind `logging.access_log` and is off by default, so
//! the demo serves requests silently.

use crate::config::Config;
use hyper::Method;
use std::net::SocketAddr;

/// Write to info log
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to error log
fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("AgentLink demo server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    write_info("Endpoints: /health, /api/v1/agents, /api/v1/jobs");
    write_info("Using Tokio runtime for concurrency");
    write_info("======================================\n");
}

pub fn log_request(method: &Method, path: &str) {
    write_info(&format!("[Request] {method} {path}"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
