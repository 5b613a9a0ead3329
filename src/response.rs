//! HTTP response construction
//!
//! Every demo response carries the same fixed header set: status 200,
//! `Content-Type: application/json`, and CORS open to any origin. There
//! is no error surface; unmatched paths are handled upstream by the
//! fallback route rather than a 404 here.

use crate::config::HttpConfig;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde::Serialize;

/// Serialize a payload and wrap it with the fixed demo header set
pub fn json_response<T: Serialize>(body: &T, http_config: &HttpConfig) -> Response<Full<Bytes>> {
    // The payloads are fixed in-memory structures; serialization failing
    // would be a programming error, so fall back to an empty object
    // instead of surfacing an error status.
    let json = serde_json::to_string(body).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to serialize response: {e}"));
        String::from("{}")
    });

    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Server", http_config.server_name.as_str())
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_config() -> HttpConfig {
        HttpConfig {
            server_name: "AgentLink-Demo/3.0".to_string(),
        }
    }

    #[test]
    fn test_fixed_header_set() {
        let resp = json_response(&serde_json::json!({"ok": true}), &http_config());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(resp.headers()["Server"], "AgentLink-Demo/3.0");
    }
}
