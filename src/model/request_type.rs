use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of allocation being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    /// Start a brand-new project.
    New,
    /// Renew an existing project's allocation.
    Renew,
    /// Join an existing project.
    Add,
}

static ALL_REQUEST_TYPES: &[RequestType] = &[RequestType::New, RequestType::Renew, RequestType::Add];

impl RequestType {
    /// Returns the wire value stored in the submission payload.
    pub fn value(&self) -> &'static str {
        match self {
            RequestType::New => "new",
            RequestType::Renew => "renew",
            RequestType::Add => "add",
        }
    }

    /// Returns the human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            RequestType::New => "Request new project",
            RequestType::Renew => "Renew existing project",
            RequestType::Add => "Request add to existing project",
        }
    }

    /// Parses a wire value back into a request type.
    pub fn from_value(value: &str) -> Option<Self> {
        ALL_REQUEST_TYPES.iter().copied().find(|t| t.value() == value)
    }

    /// Returns all request types in display order.
    pub fn all() -> &'static [RequestType] {
        ALL_REQUEST_TYPES
    }
}

#[mutants::skip]
impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}
