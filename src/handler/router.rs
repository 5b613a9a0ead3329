//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Only the request path is
//! consulted: method, query string, and body are ignored, and every
//! request resolves to a 200 JSON response.

use crate::config::AppState;
use crate::logger;
use crate::response;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use super::payload;

/// The fixed route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Health,
    Agents,
    Jobs,
    Fallback,
}

impl Route {
    /// Match a request path against the route literals
    ///
    /// Exact string equality only. Sub-paths such as `/api/v1/agents/1`
    /// and trailing-slash variants fall through to `Fallback`.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path {
            "/health" => Self::Health,
            "/api/v1/agents" => Self::Agents,
            "/api/v1/jobs" => Self::Jobs,
            _ => Self::Fallback,
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path();

    if state.config.logging.access_log {
        logger::log_request(req.method(), path);
    }

    Ok(dispatch(Route::from_path(path), &state))
}

/// Select and build the payload for a matched route
fn dispatch(route: Route, state: &AppState) -> Response<Full<Bytes>> {
    let http_config = &state.config.http;
    match route {
        Route::Health => response::json_response(&payload::health(), http_config),
        Route::Agents => response::json_response(&payload::agents(&state.catalog), http_config),
        Route::Jobs => response::json_response(&payload::jobs(&state.catalog), http_config),
        Route::Fallback => response::json_response(&payload::index(), http_config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn make_state() -> AppState {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        AppState::new(cfg)
    }

    #[test]
    fn test_route_exact_match() {
        assert_eq!(Route::from_path("/health"), Route::Health);
        assert_eq!(Route::from_path("/api/v1/agents"), Route::Agents);
        assert_eq!(Route::from_path("/api/v1/jobs"), Route::Jobs);
    }

    #[test]
    fn test_unmatched_paths_fall_back() {
        assert_eq!(Route::from_path("/"), Route::Fallback);
        assert_eq!(Route::from_path(""), Route::Fallback);
        assert_eq!(Route::from_path("/health/"), Route::Fallback);
        assert_eq!(Route::from_path("/api/v1/agents/1"), Route::Fallback);
        assert_eq!(Route::from_path("/api/v1/jobs/"), Route::Fallback);
        assert_eq!(Route::from_path("/api/v1"), Route::Fallback);
        assert_eq!(Route::from_path("/unknown"), Route::Fallback);
    }

    #[test]
    fn test_dispatch_always_200_json() {
        let state = make_state();
        for route in [Route::Health, Route::Agents, Route::Jobs, Route::Fallback] {
            let resp = dispatch(route, &state);
            assert_eq!(resp.status(), 200);
            assert_eq!(resp.headers()["Content-Type"], "application/json");
            assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
        }
    }
}
