//! Domain layer for the Back Office console client.
//!
//! This crate contains:
//! - Entity models (Payment, Product, Permission, Role)
//! - Validated Create/Update request projections
//! - Association records (RolePermission, UserRole)

pub mod models;
