//! Role domain models and role/user association records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Role entity as returned by the server.
///
/// System roles are immutable: they cannot be created from the console and
/// their name and flag cannot be changed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_system: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a role.
///
/// There is no is_system field here: roles created through the console are
/// always non-system, which the server enforces as well.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateRoleRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update for a role. is_system is structurally absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateRoleRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateRoleRequest {
    /// Restricts an edited payload to what the server accepts for `role`.
    ///
    /// System roles reject name changes, so the name is dropped for them
    /// even if it was edited in the UI.
    pub fn restricted_to(mut self, role: &Role) -> Self {
        if role.is_system {
            self.name = None;
        }
        self
    }
}

impl From<&Role> for UpdateRoleRequest {
    /// Pre-populates an edit form from a fetched role.
    fn from(role: &Role) -> Self {
        Self {
            name: Some(role.name.clone()),
            description: role.description.clone(),
        }
    }
}

/// Role-to-permission association record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RolePermission {
    pub role_id: Uuid,
    pub permission_id: Uuid,
}

/// User-to-role association record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UserRole {
    pub user_id: Uuid,
    pub role_id: Uuid,
    pub assigned_by: Option<Uuid>,
    pub assigned_at: DateTime<Utc>,
}

/// Request body for granting a permission to a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GrantPermissionRequest {
    pub permission_id: Uuid,
}

/// Request body for assigning a role to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AssignRoleRequest {
    pub user_id: Uuid,
}
