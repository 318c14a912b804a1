//! Contract over the remote collection API and the mutation gateway in
//! front of it.
//!
//! [`CollectionApi`] is the transport seam: one implementation speaks HTTP
//! ([`HttpCollectionApi`]), tests substitute an in-memory fake.
//! [`MutationGateway`] owns the write path: it stamps submission metadata on
//! create and forwards the full draft otherwise. Neither consumes a success
//! response body beyond the 2xx status; reconciliation happens through the
//! store's refetch.

pub mod http;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Draft, Resource};

pub use http::HttpCollectionApi;

/// Common interface to a per-resource collection endpoint.
#[async_trait]
pub trait CollectionApi<R: Resource>: Send + Sync {
    /// Fetch the full collection, in server order.
    async fn list(&self) -> Result<Vec<R>>;

    /// Create a new resource from a draft.
    async fn create(&self, draft: &R::Draft) -> Result<()>;

    /// Replace the resource addressed by `id` with the full draft.
    async fn update(&self, id: &str, draft: &R::Draft) -> Result<()>;

    /// Delete the resource addressed by `id`.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Write-side gateway over a [`CollectionApi`].
pub struct MutationGateway<R: Resource> {
    api: Arc<dyn CollectionApi<R>>,
}

impl<R: Resource> MutationGateway<R> {
    pub fn new(api: Arc<dyn CollectionApi<R>>) -> Self {
        Self { api }
    }

    /// Stamp submission metadata and resource defaults onto the draft, then
    /// issue the create request. The caller's draft is left untouched; the
    /// stamped copy is what goes over the wire.
    pub async fn create(&self, draft: &R::Draft) -> Result<()> {
        let mut outgoing = draft.clone();
        outgoing.prepare_create();
        self.api.create(&outgoing).await
    }

    /// Full-record replace addressed by `id`. No partial patch.
    pub async fn update(&self, id: &str, draft: &R::Draft) -> Result<()> {
        self.api.update(id, draft).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api.delete(id).await
    }
}
