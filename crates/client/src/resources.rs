//! Typed clients for each back-office resource root.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use domain::models::{
    AssignRoleRequest, CreatePaymentRequest, CreatePermissionRequest, CreateProductRequest,
    CreateRoleRequest, GrantPermissionRequest, Payment, PaymentStatus, Permission, Product, Role,
    RolePermission, UpdatePaymentRequest, UpdatePermissionRequest, UpdateProductRequest,
    UpdateRoleRequest, UserRole,
};

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::query::QueryFilter;
use crate::resource::RestResource;

fn push_timestamp(params: &mut Vec<(String, String)>, key: &str, value: Option<DateTime<Utc>>) {
    if let Some(value) = value {
        params.push((
            key.to_string(),
            value.to_rfc3339_opts(SecondsFormat::Secs, true),
        ));
    }
}

/// Filter fields specific to payment lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentFilter {
    pub status: Option<PaymentStatus>,
    pub order_id: Option<Uuid>,
    pub due_from: Option<DateTime<Utc>>,
    pub due_to: Option<DateTime<Utc>>,
}

impl QueryFilter for PaymentFilter {
    fn append_params(&self, params: &mut Vec<(String, String)>) {
        if let Some(status) = self.status {
            params.push(("status".to_string(), status.to_string()));
        }
        if let Some(order_id) = self.order_id {
            params.push(("orderId".to_string(), order_id.to_string()));
        }
        push_timestamp(params, "dueFrom", self.due_from);
        push_timestamp(params, "dueTo", self.due_to);
    }
}

/// Filter fields specific to product lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

impl QueryFilter for ProductFilter {
    fn append_params(&self, params: &mut Vec<(String, String)>) {
        if let Some(category) = &self.category {
            params.push(("category".to_string(), category.clone()));
        }
        if let Some(is_active) = self.is_active {
            params.push(("isActive".to_string(), is_active.to_string()));
        }
    }
}

/// Filter fields specific to permission lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PermissionFilter {
    pub module: Option<String>,
    pub action: Option<String>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
}

impl QueryFilter for PermissionFilter {
    fn append_params(&self, params: &mut Vec<(String, String)>) {
        if let Some(module) = &self.module {
            params.push(("module".to_string(), module.clone()));
        }
        if let Some(action) = &self.action {
            params.push(("action".to_string(), action.clone()));
        }
        push_timestamp(params, "createdFrom", self.created_from);
        push_timestamp(params, "createdTo", self.created_to);
    }
}

/// Filter fields specific to role lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleFilter {
    pub is_system: Option<bool>,
}

impl QueryFilter for RoleFilter {
    fn append_params(&self, params: &mut Vec<(String, String)>) {
        if let Some(is_system) = self.is_system {
            params.push(("isSystem".to_string(), is_system.to_string()));
        }
    }
}

pub type PaymentsClient =
    RestResource<Payment, CreatePaymentRequest, UpdatePaymentRequest, PaymentFilter>;

impl PaymentsClient {
    pub fn new(api: ApiClient) -> Self {
        RestResource::with_path(api, "payments", "payment")
    }
}

pub type ProductsClient =
    RestResource<Product, CreateProductRequest, UpdateProductRequest, ProductFilter>;

impl ProductsClient {
    pub fn new(api: ApiClient) -> Self {
        RestResource::with_path(api, "products", "product")
    }
}

pub type PermissionsClient =
    RestResource<Permission, CreatePermissionRequest, UpdatePermissionRequest, PermissionFilter>;

impl PermissionsClient {
    pub fn new(api: ApiClient) -> Self {
        RestResource::with_path(api, "permissions", "permission")
    }
}

pub type RolesClient = RestResource<Role, CreateRoleRequest, UpdateRoleRequest, RoleFilter>;

impl RolesClient {
    pub fn new(api: ApiClient) -> Self {
        RestResource::with_path(api, "roles", "role")
    }

    /// Grants a permission to a role.
    pub async fn grant_permission(
        &self,
        role_id: Uuid,
        permission_id: Uuid,
    ) -> Result<RolePermission, ClientError> {
        let body = GrantPermissionRequest { permission_id };
        self.api()
            .post_json(&format!("roles/{}/permissions", role_id), &body)
            .await
    }

    /// Revokes a permission from a role.
    pub async fn revoke_permission(
        &self,
        role_id: Uuid,
        permission_id: Uuid,
    ) -> Result<(), ClientError> {
        self.api()
            .delete(&format!("roles/{}/permissions/{}", role_id, permission_id))
            .await
    }

    /// Assigns a role to a user.
    pub async fn assign_user(&self, role_id: Uuid, user_id: Uuid) -> Result<UserRole, ClientError> {
        let body = AssignRoleRequest { user_id };
        self.api()
            .post_json(&format!("roles/{}/users", role_id), &body)
            .await
    }

    /// Removes a role from a user.
    pub async fn unassign_user(&self, role_id: Uuid, user_id: Uuid) -> Result<(), ClientError> {
        self.api()
            .delete(&format!("roles/{}/users/{}", role_id, user_id))
            .await
    }
}
