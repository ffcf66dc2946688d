//! Typed REST clients for the Back Office console.
//!
//! Each resource root (payments, products, permissions, roles) is exposed
//! through the generic [`RestResource`] client behind the [`ResourceApi`]
//! trait: `list` / `get` / `create` / `update`, one request/response round
//! trip per call, no retries or caching. Errors surface as [`ClientError`];
//! translating them into user-visible messages is the caller's job.

pub mod error;
pub mod http;
pub mod query;
pub mod resource;
pub mod resources;

pub use error::ClientError;
pub use http::ApiClient;
pub use query::{ListQuery, QueryFilter, DEFAULT_PAGE_SIZE};
pub use resource::{ResourceApi, RestResource};
pub use resources::{
    PaymentFilter, PaymentsClient, PermissionFilter, PermissionsClient, ProductFilter,
    ProductsClient, RoleFilter, RolesClient,
};
