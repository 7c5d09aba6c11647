use crate::types::Source;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of passages requested per question. Not user-configurable.
pub const DEFAULT_TOP_K: u32 = 3;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryRequest {
    pub query: String,
    pub top_k: u32,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Successful chat response. Both fields are required; unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QueryAnswer {
    pub answer: String,
    pub sources: Vec<Source>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub services: BTreeMap<String, String>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Coarse backend availability shown in the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendStatus {
    #[default]
    Checking,
    Healthy,
    Unhealthy,
    Unreachable,
}

impl BackendStatus {
    pub fn from_probe<E>(probe: &Result<HealthReport, E>) -> Self {
        match probe {
            Ok(report) if report.is_healthy() => BackendStatus::Healthy,
            Ok(_) => BackendStatus::Unhealthy,
            Err(_) => BackendStatus::Unreachable,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BackendStatus::Checking => "checking",
            BackendStatus::Healthy => "healthy",
            BackendStatus::Unhealthy => "unhealthy",
            BackendStatus::Unreachable => "unreachable",
        }
    }
}
