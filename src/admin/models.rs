// src/admin/models.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::session::Role;

// ============================================================================
// Admin Models
// ============================================================================

#[derive(Deserialize, Debug, Clone)]
pub struct AdminUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    pub role: Role,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
}

fn default_active() -> bool {
    true
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SystemStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_jobs: u64,
    #[serde(default)]
    pub total_applications: u64,
    #[serde(default)]
    pub total_interviews: u64,
    #[serde(default)]
    pub active_recruiters: u64,
    #[serde(default)]
    pub active_candidates: u64,
    #[serde(default)]
    pub jobs_by_status: HashMap<String, u64>,
    #[serde(default)]
    pub applications_by_status: HashMap<String, u64>,
    #[serde(default)]
    pub interviews_by_status: HashMap<String, u64>,
}

/// Date window shared by the log queries.
#[derive(Serialize, Debug, Clone, Default)]
pub struct LogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ErrorLog {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub timestamp: String,
    #[serde(default, alias = "severity")]
    pub level: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AiLog {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub input: serde_json::Value,
    #[serde(default)]
    pub output: serde_json::Value,
    pub timestamp: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BackupResponse {
    #[serde(default)]
    pub message: String,
    /// Name of the archive written by the backend.
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceAction {
    CleanupOldLogs,
    ArchiveOldJobs,
}

impl MaintenanceAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceAction::CleanupOldLogs => "cleanup_old_logs",
            MaintenanceAction::ArchiveOldJobs => "archive_old_jobs",
        }
    }
}

impl fmt::Display for MaintenanceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaintenanceAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "cleanup_old_logs" => Ok(MaintenanceAction::CleanupOldLogs),
            "archive_old_jobs" => Ok(MaintenanceAction::ArchiveOldJobs),
            other => Err(format!("unknown maintenance action `{other}`")),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy)]
pub(crate) struct MaintenanceQuery {
    pub action: MaintenanceAction,
}

/// A backup archive chosen for restore.
#[derive(Debug, Clone)]
pub struct BackupFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
