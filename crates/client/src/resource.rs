//! Generic resource client implementing the CRUD contract.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::debug;
use uuid::Uuid;

use shared::pagination::Page;

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::query::{ListQuery, QueryFilter};

/// The contract every resource client exposes.
///
/// One request/response round trip per call; failures are returned to the
/// caller, which is solely responsible for translating them into
/// user-visible messages.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    type Entity: Send + Sync;
    type Create: Send + Sync;
    type Update: Send + Sync;
    type Filter: QueryFilter + Send + Sync;

    /// Short resource name used in user-facing error strings
    /// (e.g. "payment" in "Failed to create payment").
    fn resource_name(&self) -> &'static str;

    async fn list(
        &self,
        query: &ListQuery<Self::Filter>,
    ) -> Result<Page<Self::Entity>, ClientError>;

    async fn get(&self, id: Uuid) -> Result<Self::Entity, ClientError>;

    async fn create(&self, payload: &Self::Create) -> Result<Self::Entity, ClientError>;

    async fn update(&self, id: Uuid, payload: &Self::Update)
        -> Result<Self::Entity, ClientError>;
}

/// Generic REST client for one resource root.
///
/// All per-entity clients are aliases of this type; entity-specific
/// endpoints (role associations) live in inherent impls on those aliases.
#[derive(Debug, Clone)]
pub struct RestResource<E, C, U, F> {
    api: ApiClient,
    path: &'static str,
    name: &'static str,
    _marker: PhantomData<fn() -> (E, C, U, F)>,
}

impl<E, C, U, F> RestResource<E, C, U, F> {
    /// Creates a client for the resource rooted at `path`. The per-entity
    /// aliases wrap this in their own `new` with the path baked in.
    pub fn with_path(api: ApiClient, path: &'static str, name: &'static str) -> Self {
        Self {
            api,
            path,
            name,
            _marker: PhantomData,
        }
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }

    pub(crate) fn item_path(&self, id: Uuid) -> String {
        format!("{}/{}", self.path, id)
    }
}

#[async_trait]
impl<E, C, U, F> ResourceApi for RestResource<E, C, U, F>
where
    E: DeserializeOwned + Send + Sync,
    C: Serialize + Send + Sync,
    U: Serialize + Send + Sync,
    F: QueryFilter + Send + Sync,
{
    type Entity = E;
    type Create = C;
    type Update = U;
    type Filter = F;

    fn resource_name(&self) -> &'static str {
        self.name
    }

    async fn list(&self, query: &ListQuery<F>) -> Result<Page<E>, ClientError> {
        debug!(resource = self.path, page = query.page, limit = query.limit, "list");
        self.api.get_json(self.path, &query.to_params()).await
    }

    async fn get(&self, id: Uuid) -> Result<E, ClientError> {
        debug!(resource = self.path, id = %id, "get");
        self.api.get_json(&self.item_path(id), &[]).await
    }

    async fn create(&self, payload: &C) -> Result<E, ClientError> {
        debug!(resource = self.path, "create");
        self.api.post_json(self.path, payload).await
    }

    async fn update(&self, id: Uuid, payload: &U) -> Result<E, ClientError> {
        debug!(resource = self.path, id = %id, "update");
        self.api.put_json(&self.item_path(id), payload).await
    }
}
