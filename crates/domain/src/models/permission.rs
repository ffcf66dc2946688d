//! Permission domain models for tenant-level RBAC.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Permission entity as returned by the server.
///
/// `module` and `action` define the capability (e.g. "payments:read");
/// `name` is the display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Permission {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub module: String,
    pub action: String,
    pub description: Option<String>,
}

impl Permission {
    /// The capability identifier in "module:action" form.
    pub fn capability(&self) -> String {
        format!("{}:{}", self.module, self.action)
    }
}

/// Request to create a permission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreatePermissionRequest {
    pub tenant_id: Uuid,
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "Module must be 1-50 characters"))]
    pub module: String,
    #[validate(length(min = 1, max = 50, message = "Action must be 1-50 characters"))]
    pub action: String,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update for a permission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdatePermissionRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Module must be 1-50 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Action must be 1-50 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Permission> for UpdatePermissionRequest {
    /// Pre-populates an edit form from a fetched permission.
    fn from(permission: &Permission) -> Self {
        Self {
            name: Some(permission.name.clone()),
            module: Some(permission.module.clone()),
            action: Some(permission.action.clone()),
            description: permission.description.clone(),
        }
    }
}
