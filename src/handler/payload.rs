//! Response payload builders for the demo routes
//!
//! The listing payloads borrow the catalog tables directly; only the
//! health timestamp is generated fresh per request.

use chrono::Utc;
use serde::Serialize;

use crate::catalog::{Agent, Catalog, Job, Pagination};

pub const API_VERSION: &str = "3.0.0-demo";
pub const API_MESSAGE: &str = "AgentLink 3.0 Demo API";
pub const ENDPOINTS: [&str; 3] = ["/health", "/api/v1/agents", "/api/v1/jobs"];

/// Timestamp format used by `/health`: `YYYY-MM-DDTHH:MM:SSZ`, UTC
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Serialize)]
pub struct HealthPayload {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct AgentsPayload<'a> {
    pub agents: &'a [Agent],
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct JobsPayload<'a> {
    pub jobs: &'a [Job],
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct IndexPayload {
    pub message: &'static str,
    pub endpoints: [&'static str; 3],
}

pub fn health() -> HealthPayload {
    HealthPayload {
        status: "ok",
        version: API_VERSION,
        timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
    }
}

pub fn agents(catalog: &Catalog) -> AgentsPayload<'_> {
    AgentsPayload {
        agents: &catalog.agents,
        pagination: Pagination::single_page(catalog.agents.len()),
    }
}

pub fn jobs(catalog: &Catalog) -> JobsPayload<'_> {
    JobsPayload {
        jobs: &catalog.jobs,
        pagination: Pagination::single_page(catalog.jobs.len()),
    }
}

pub const fn index() -> IndexPayload {
    IndexPayload {
        message: API_MESSAGE,
        endpoints: ENDPOINTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_health_payload_shape() {
        let p = health();
        assert_eq!(p.status, "ok");
        assert_eq!(p.version, "3.0.0-demo");
        assert!(NaiveDateTime::parse_from_str(&p.timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_agents_payload() {
        let catalog = Catalog::demo();
        let value = serde_json::to_value(agents(&catalog)).unwrap();
        assert_eq!(value["agents"].as_array().unwrap().len(), 3);
        assert_eq!(value["agents"][0]["id"], "1");
        assert_eq!(value["agents"][2]["id"], "3");
        assert_eq!(value["pagination"]["page"], 1);
        assert_eq!(value["pagination"]["limit"], 20);
        assert_eq!(value["pagination"]["total"], 3);
        assert_eq!(value["pagination"]["pages"], 1);
    }

    #[test]
    fn test_jobs_payload() {
        let catalog = Catalog::demo();
        let value = serde_json::to_value(jobs(&catalog)).unwrap();
        assert_eq!(value["jobs"].as_array().unwrap().len(), 3);
        assert_eq!(value["jobs"][0]["title"], "Data Analysis Project");
        assert_eq!(value["pagination"]["total"], 3);
    }

    #[test]
    fn test_index_payload_lists_endpoints() {
        let value = serde_json::to_value(index()).unwrap();
        assert_eq!(value["message"], "AgentLink 3.0 Demo API");
        let endpoints = value["endpoints"].as_array().unwrap();
        assert_eq!(endpoints.len(), 3);
        assert_eq!(endpoints[0], "/health");
    }

    #[test]
    fn test_listing_payloads_are_idempotent() {
        let catalog = Catalog::demo();
        let first = serde_json::to_string(&agents(&catalog)).unwrap();
        let second = serde_json::to_string(&agents(&catalog)).unwrap();
        assert_eq!(first, second);

        let first = serde_json::to_string(&jobs(&catalog)).unwrap();
        let second = serde_json::to_string(&jobs(&catalog)).unwrap();
        assert_eq!(first, second);
    }
}
