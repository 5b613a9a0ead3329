//! Demo catalog module
//!
//! The fixed agent and job tables served by the API. Both tables are built
//! once at startup from the literal records below and never mutated.

use serde::Serialize;

/// A worker entity with reputation and skill metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub emoji: String,
    pub reputation_score: f64,
    pub total_tasks_completed: u64,
    pub availability_status: AvailabilityStatus,
    pub skills: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    Available,
    Busy,
}

/// A task posting with a budget range and employer reference
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub job_type: JobType,
    pub budget_min: u64,
    pub budget_max: u64,
    pub status: JobStatus,
    pub employer: Employer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Standard,
    MicroTask,
    Project,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Open,
}

#[derive(Debug, Clone, Serialize)]
pub struct Employer {
    pub name: String,
    pub handle: String,
}

/// Pagination metadata for a listing response
///
/// The demo tables fit on one page, so every field except `total` is a
/// fixed constant.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub pages: usize,
}

impl Pagination {
    pub const fn single_page(total: usize) -> Self {
        Self {
            page: 1,
            limit: 20,
            total,
            pages: 1,
        }
    }
}

/// The immutable demo data set
#[derive(Debug, Clone)]
pub struct Catalog {
    pub agents: Vec<Agent>,
    pub jobs: Vec<Job>,
}

impl Catalog {
    /// Build the hardcoded demo tables
    pub fn demo() -> Self {
        Self {
            agents: demo_agents(),
            jobs: demo_jobs(),
        }
    }
}

fn demo_agents() -> Vec<Agent> {
    vec![
        Agent {
            id: "1".to_string(),
            name: "AlphaBot".to_string(),
            slug: "alphabot".to_string(),
            emoji: "\u{1f916}".to_string(),
            reputation_score: 4.8,
            total_tasks_completed: 156,
            availability_status: AvailabilityStatus::Available,
            skills: vec!["Python".to_string(), "Data Analysis".to_string()],
            description: "Expert data analysis agent".to_string(),
        },
        Agent {
            id: "2".to_string(),
            name: "BetaAI".to_string(),
            slug: "betaai".to_string(),
            emoji: "\u{1f9be}".to_string(),
            reputation_score: 4.5,
            total_tasks_completed: 89,
            availability_status: AvailabilityStatus::Available,
            skills: vec!["JavaScript".to_string(), "Web Scraping".to_string()],
            description: "Web automation specialist".to_string(),
        },
        Agent {
            id: "3".to_string(),
            name: "GammaBot".to_string(),
            slug: "gammabot".to_string(),
            emoji: "\u{1f9e0}".to_string(),
            reputation_score: 4.9,
            total_tasks_completed: 234,
            availability_status: AvailabilityStatus::Busy,
            skills: vec!["Machine Learning".to_string(), "NLP".to_string()],
            description: "ML and NLP expert".to_string(),
        },
    ]
}

fn demo_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "1".to_string(),
            title: "Data Analysis Project".to_string(),
            description: "Analyze sales data and create reports".to_string(),
            job_type: JobType::Standard,
            budget_min: 500,
            budget_max: 1000,
            status: JobStatus::Open,
            employer: Employer {
                name: "TechCorp".to_string(),
                handle: "techcorp".to_string(),
            },
        },
        Job {
            id: "2".to_string(),
            title: "Web Scraper Needed".to_string(),
            description: "Build a scraper for e-commerce prices".to_string(),
            job_type: JobType::MicroTask,
            budget_min: 100,
            budget_max: 200,
            status: JobStatus::Open,
            employer: Employer {
                name: "Shopify".to_string(),
                handle: "shopify".to_string(),
            },
        },
        Job {
            id: "3".to_string(),
            title: "AI Integration".to_string(),
            description: "Integrate OpenAI API into existing app".to_string(),
            job_type: JobType::Project,
            budget_min: 2000,
            budget_max: 5000,
            status: JobStatus::Open,
            employer: Employer {
                name: "StartupXYZ".to_string(),
                handle: "startupxyz".to_string(),
            },
        },
    ]
}
