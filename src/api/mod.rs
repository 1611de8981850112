//! Thin console API calls: tenant listing and server build info.

use reqwest::Client;
use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::models::tenant::TenantEntry;

pub const TENANTS_PATH: &str = "/select/logsql/tenants";
pub const BUILD_INFO_PATH: &str = "/api/v1/status/buildinfo";

#[derive(Debug, Deserialize)]
struct BuildInfoResponse {
    data: BuildInfoData,
}

#[derive(Debug, Deserialize)]
struct BuildInfoData {
    version: String,
}

/// Fetch the tenants known to the server, formatted as
/// `"accountId:projectId"` and sorted lexicographically.
pub async fn fetch_account_ids(http: &Client, server_url: &str) -> AppResult<Vec<String>> {
    let entries: Vec<TenantEntry> = http
        .get(endpoint(server_url, TENANTS_PATH))
        .send()
        .await
        .map_err(|e| AppError::NetworkFailure(e.to_string()))?
        .json()
        .await
        .map_err(|e| AppError::NetworkFailure(e.to_string()))?;

    let mut ids: Vec<String> = entries.iter().map(TenantEntry::to_tenant_string).collect();
    ids.sort();
    Ok(ids)
}

/// Fetch the server's build version.
pub async fn fetch_version(http: &Client, server_url: &str) -> AppResult<String> {
    let info: BuildInfoResponse = http
        .get(endpoint(server_url, BUILD_INFO_PATH))
        .send()
        .await
        .map_err(|e| AppError::NetworkFailure(e.to_string()))?
        .json()
        .await
        .map_err(|e| AppError::NetworkFailure(e.to_string()))?;
    Ok(info.data.version)
}

fn endpoint(server_url: &str, path: &str) -> String {
    format!("{}{}", server_url.trim_end_matches('/'), path)
}
