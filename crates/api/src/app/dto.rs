use serde::{Deserialize, Serialize};

/// Body of every non-2xx response.
///
/// `error` is the human-readable message; `code` is stable and meant for
/// programmatic checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
