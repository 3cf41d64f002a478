// src/admin/api.rs

use reqwest::multipart::{Form, Part};
use tracing::info;

use super::models::*;
use super::validators::{BackupFileValidator, LogQueryValidator};
use crate::auth::models::MessageResponse;
use crate::client::ApiClient;
use crate::common::{path_segment, ApiError, Validator};
use crate::navigation::Notifier;

/// Administration console calls. Every endpoint requires an admin session.
#[derive(Clone)]
pub struct AdminApi {
    client: ApiClient,
}

impl AdminApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn users(&self, filter: &UserFilter) -> Result<Vec<AdminUser>, ApiError> {
        self.client.get_with_query("/admin/users", filter).await
    }

    pub async fn stats(&self) -> Result<SystemStats, ApiError> {
        self.client.get("/admin/stats").await
    }

    pub async fn error_logs(&self, query: &LogQuery) -> Result<Vec<ErrorLog>, ApiError> {
        LogQueryValidator.validate(query).into_result()?;
        self.client.get_with_query("/admin/logs/errors", query).await
    }

    /// The level filter does not apply to AI logs and is dropped.
    pub async fn ai_logs(&self, query: &LogQuery) -> Result<Vec<AiLog>, ApiError> {
        LogQueryValidator.validate(query).into_result()?;
        let window = LogQuery {
            level: None,
            ..query.clone()
        };
        self.client.get_with_query("/admin/logs/ai", &window).await
    }

    pub async fn backup(&self) -> Result<BackupResponse, ApiError> {
        let response: BackupResponse = self.client.post_empty("/admin/backup").await?;
        info!(file = ?response.file, "Backup created");
        self.client.notifier().toast_success("Backup completed successfully");
        Ok(response)
    }

    pub async fn restore(&self, backup: BackupFile) -> Result<MessageResponse, ApiError> {
        BackupFileValidator.validate(&backup).into_result()?;

        let part = Part::bytes(backup.bytes)
            .file_name(backup.file_name.clone())
            .mime_str("application/json")?;
        let form = Form::new().part("backup", part);

        let response: MessageResponse = self.client.post_multipart("/admin/restore", form).await?;
        info!(file = %backup.file_name, "System restored from backup");
        self.client.notifier().toast_success("System restored successfully");
        Ok(response)
    }

    pub async fn download_backup(&self, backup_id: &str) -> Result<Vec<u8>, ApiError> {
        let path = format!("/admin/backup/{}/download", path_segment(backup_id)?);
        self.client.get_bytes(&path).await
    }

    pub async fn maintenance(&self, action: MaintenanceAction) -> Result<MessageResponse, ApiError> {
        let response: MessageResponse = self
            .client
            .post_with_query("/admin/maintenance", &MaintenanceQuery { action })
            .await?;
        info!(action = %action, "Maintenance action completed");
        Ok(response)
    }
}

/// File name offered for a downloaded archive, e.g. `backup-2024-05-01.json`.
pub fn backup_file_name(date: chrono::NaiveDate) -> String {
    format!("backup-{}.json", date.format("%Y-%m-%d"))
}
