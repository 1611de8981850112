use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Header names the server expects for tenant scoping.
pub const ACCOUNT_ID_HEADER: &str = "AccountID";
pub const PROJECT_ID_HEADER: &str = "ProjectID";

/// A logical storage partition, selected as an account/project pair.
/// Displayed and persisted as `"accountId:projectId"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantId {
    pub account_id: String,
    pub project_id: String,
}

impl Default for TenantId {
    fn default() -> Self {
        Self {
            account_id: "0".to_string(),
            project_id: "0".to_string(),
        }
    }
}

impl TenantId {
    pub fn new(account_id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            project_id: project_id.into(),
        }
    }

    /// Parse the `"accountId:projectId"` form. A bare account id is accepted
    /// and gets project `0`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let mut parts = s.splitn(2, ':');
        let account = parts.next().unwrap_or_default().trim();
        let project = parts.next().unwrap_or("0").trim();
        if account.is_empty() || project.is_empty() {
            return Err(AppError::InvalidTenant(s.to_string()));
        }
        Ok(Self::new(account, project))
    }

    /// Header pairs to attach to every tenant-scoped request.
    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [
            (ACCOUNT_ID_HEADER, self.account_id.as_str()),
            (PROJECT_ID_HEADER, self.project_id.as_str()),
        ]
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.account_id, self.project_id)
    }
}

/// One entry of the server's tenant listing.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TenantEntry {
    pub account_id: u32,
    pub project_id: u32,
}

impl TenantEntry {
    pub fn to_tenant_string(&self) -> String {
        format!("{}:{}", self.account_id, self.project_id)
    }
}
