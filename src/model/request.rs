use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RequestType;

/// The submission payload handed off to the allocation backend.
///
/// Field names mirror the backend's allocation-request record. Fields that
/// only apply to one request type are omitted from the payload when empty;
/// the backend performs its own authoritative validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRequest {
    pub username: String,
    pub project_request_type: RequestType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pi_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pi_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pi_institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub science_fields: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_to_proposal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub funding_sources: Vec<String>,
    pub access_running_apps: bool,
    pub access_shell: bool,
    pub access_download: bool,
    pub interest_in_hpc: bool,
    pub created_at: DateTime<Utc>,
}

impl AllocationRequest {
    /// Serializes the request as pretty-printed JSON for review and handoff.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
