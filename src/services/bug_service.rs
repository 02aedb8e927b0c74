use crate::database::JsonStore;
use crate::models::{BugReport, ReportedBy};
use crate::utils::error::AppError;
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;

use super::auth_service::MessageResponse;

/// Initial status of every new report. No transition operation exists.
const STATUS_NEW: &str = "new";

// Reporter fields default to empty so an absent field behaves like an empty
// one; both are rejected below.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct BugReportRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub pseudo: String,
}

/// Records a bug report. Only the reporter fields are validated; `category`
/// and `description` are stored as submitted, and the reporter is not
/// checked against the user store.
pub fn report_bug(store: &JsonStore, request: &BugReportRequest) -> Result<MessageResponse, AppError> {
    if request.email.is_empty() || request.pseudo.is_empty() {
        return Err(AppError::MissingUserInfo);
    }

    let mut document = store.load_bugs()?;

    let bug = BugReport {
        id: Utc::now().timestamp_millis().to_string(),
        category: request.category.clone(),
        description: request.description.clone(),
        status: STATUS_NEW.to_string(),
        date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        reported_by: ReportedBy {
            email: request.email.clone(),
            pseudo: request.pseudo.clone(),
        },
    };

    document.bugs.push(bug);
    store.save_bugs(&document)?;

    Ok(MessageResponse {
        message: "Bug report submitted successfully".to_string(),
    })
}
