use serde::{Deserialize, Serialize};

/// Persisted bug report. `status` starts at "new"; no transition operation
/// exists, so it never changes after creation.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct BugReport {
    pub id: String,  // Time-derived: Unix millis at submission, as a string
    pub category: String,
    pub description: String,
    pub status: String,
    pub date: String,  // ISO-8601 UTC timestamp
    #[serde(rename = "reportedBy")]
    pub reported_by: ReportedBy,
}

/// Reporter identity as submitted. Not cross-checked against the user store.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct ReportedBy {
    pub email: String,
    pub pseudo: String,
}

/// Wire/disk wrapper for `bugs.json`: `{"bugs":[BugReport,...]}`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct BugsDocument {
    pub bugs: Vec<BugReport>,
}
