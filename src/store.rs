//! In-memory cache of a remote collection and its load lifecycle.
//!
//! The store is the single owner of the authoritative list. Every load and
//! refresh fetches the full collection and replaces the cache wholesale (a
//! reconciling refetch); nothing is ever patched in place.
//!
//! Each fetch is tagged with a monotonically increasing request version.
//! When fetches overlap, only the response for the latest-issued version is
//! applied; earlier responses resolving late are discarded instead of
//! clobbering newer data.

use std::collections::HashSet;

use crate::api::CollectionApi;
use crate::error::Result;
use crate::types::Resource;

/// Load lifecycle status: `idle → loading → ready | error`.
///
/// An error is terminal until the next explicit load or refresh; the store
/// never retries on its own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

/// Handle for an in-flight fetch, carrying its request version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken {
    version: u64,
}

pub struct ResourceStore<R: Resource> {
    items: Vec<R>,
    phase: LoadPhase,
    issued: u64,
}

impl<R: Resource> Default for ResourceStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ResourceStore<R> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Idle,
            issued: 0,
        }
    }

    /// The cached list, in server order. Stays visible while a refresh is in
    /// flight; empty until the first load resolves.
    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Find a cached resource by id.
    pub fn get(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Begin a fetch: bumps the request version and transitions to
    /// `Loading`. The previously displayed list is retained until the new
    /// response is applied, so a refresh never flashes to empty.
    pub fn begin_load(&mut self) -> LoadToken {
        self.issued += 1;
        self.phase = LoadPhase::Loading;
        LoadToken {
            version: self.issued,
        }
    }

    /// Apply a fetch outcome. Returns whether the response was applied;
    /// responses for anything but the latest-issued version are discarded.
    pub fn apply(&mut self, token: LoadToken, result: Result<Vec<R>>) -> bool {
        if token.version != self.issued {
            tracing::debug!(
                "discarding stale {} response (version {} superseded by {})",
                R::COLLECTION,
                token.version,
                self.issued
            );
            return false;
        }

        match result {
            Ok(list) => {
                self.items = dedup_by_id(list);
                self.phase = LoadPhase::Ready;
            }
            Err(e) => {
                self.phase = LoadPhase::Error(e.to_string());
            }
        }
        true
    }

    /// Fetch the full collection and apply it. Returns whether the response
    /// was applied (a concurrent later fetch may have superseded this one).
    pub async fn refresh(&mut self, api: &dyn CollectionApi<R>) -> bool {
        let token = self.begin_load();
        let result = api.list().await;
        self.apply(token, result)
    }

    /// First load. Identical fetch semantics to [`refresh`](Self::refresh);
    /// callers see a loading placeholder only because nothing is cached yet.
    pub async fn load(&mut self, api: &dyn CollectionApi<R>) -> bool {
        self.refresh(api).await
    }
}

/// Keep the first occurrence per id, preserving server order.
fn dedup_by_id<R: Resource>(mut list: Vec<R>) -> Vec<R> {
    let mut seen = HashSet::new();
    list.retain(|item| seen.insert(item.id().to_string()));
    list
}
