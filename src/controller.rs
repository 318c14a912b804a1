//! The generic resource-list controller.
//!
//! One instance per screen: a cached store, the current search query, a
//! create/edit modal, and a mutation gateway, wired so that every
//! successful mutation triggers a reconciling refetch of the whole list.
//! Parameterized by the [`Resource`] capability set, so the product and
//! customer screens share this implementation verbatim.

use std::sync::Arc;

use crate::api::{CollectionApi, MutationGateway};
use crate::confirm::ConfirmationGate;
use crate::error::{Result, ShopdeskError};
use crate::modal::{ModalController, ModalMode, ModalState};
use crate::notify::{Notification, NotificationQueue};
use crate::search::filter_resources;
use crate::store::{LoadPhase, ResourceStore};
use crate::types::{Draft, Resource};

pub struct ResourceController<R: Resource> {
    api: Arc<dyn CollectionApi<R>>,
    gateway: MutationGateway<R>,
    store: ResourceStore<R>,
    modal: ModalController<R>,
    notifications: NotificationQueue,
    query: String,
}

impl<R: Resource> ResourceController<R> {
    pub fn new(api: Arc<dyn CollectionApi<R>>) -> Self {
        Self {
            gateway: MutationGateway::new(api.clone()),
            api,
            store: ResourceStore::new(),
            modal: ModalController::new(),
            notifications: NotificationQueue::new(),
            query: String::new(),
        }
    }

    pub fn store(&self) -> &ResourceStore<R> {
        &self.store
    }

    pub fn modal(&self) -> &ModalController<R> {
        &self.modal
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The filtered view the screen renders: the cached list narrowed by the
    /// current query, in server order.
    pub fn visible(&self) -> Vec<&R> {
        filter_resources(self.store.items(), &self.query)
    }

    /// Fetch the full collection into the store.
    pub async fn load(&mut self) -> bool {
        self.store.load(&*self.api).await
    }

    /// Refetch the full collection, keeping the current list visible until
    /// the response resolves.
    pub async fn refresh(&mut self) -> bool {
        self.store.refresh(&*self.api).await
    }

    /// Open the create modal with field defaults.
    pub fn open_create(&mut self) {
        self.modal.open_create();
    }

    /// Open the edit modal on the cached resource addressed by `id`.
    pub fn open_edit(&mut self, id: &str) -> Result<()> {
        let resource = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| ShopdeskError::Other(format!("{} '{}' not found", R::KIND, id)))?;
        self.modal.open_edit(&resource);
        Ok(())
    }

    /// Replace one field of the open draft from raw input.
    pub fn edit_field(&mut self, field: &str, value: &str) -> Result<()> {
        self.modal.edit_field(field, value)
    }

    /// Close the modal and discard the draft. No network call, no store
    /// mutation.
    pub fn cancel(&mut self) {
        self.modal.cancel();
    }

    /// Submit the open draft through the gateway.
    ///
    /// On success the modal closes, the draft is discarded, and the whole
    /// list is refetched. On failure the modal stays open with the draft
    /// exactly as last edited, and the failure is queued as a notification;
    /// retry is simply submitting again.
    pub async fn submit(&mut self) -> Result<()> {
        let (mode, draft) = match self.modal.state() {
            ModalState::Open { mode, draft } => (mode.clone(), draft.clone()),
            ModalState::Closed => {
                return Err(ShopdeskError::Other(
                    "no draft is open for submission".to_string(),
                ));
            }
        };

        draft.validate()?;

        let result = match &mode {
            ModalMode::Create => self.gateway.create(&draft).await,
            ModalMode::Edit { id } => self.gateway.update(id, &draft).await,
        };

        match result {
            Ok(()) => {
                self.modal.complete_submit();
                self.reconcile().await;
                Ok(())
            }
            Err(e) => {
                self.notifications.push(Notification::error(format!(
                    "failed to save {}: {}",
                    R::KIND,
                    e
                )));
                Err(e)
            }
        }
    }

    /// Delete the resource addressed by `id`, guarded by `gate`.
    ///
    /// Returns `Ok(false)` when the gate declines: zero network calls, zero
    /// state change. On delete failure the cached list is left untouched and
    /// the failure is queued as a notification.
    pub async fn delete(&mut self, id: &str, gate: &dyn ConfirmationGate) -> Result<bool> {
        let prompt = format!("Are you sure you want to delete this {}?", R::KIND);
        if !gate.confirm(&prompt) {
            return Ok(false);
        }

        match self.gateway.delete(id).await {
            Ok(()) => {
                self.reconcile().await;
                Ok(true)
            }
            Err(e) => {
                self.notifications.push(Notification::error(format!(
                    "failed to delete {}: {}",
                    R::KIND,
                    e
                )));
                Err(e)
            }
        }
    }

    /// Reconciling refetch after a successful mutation.
    async fn reconcile(&mut self) {
        self.store.refresh(&*self.api).await;
        if let LoadPhase::Error(message) = self.store.phase() {
            tracing::warn!("post-mutation {} refresh failed: {}", R::COLLECTION, message);
        }
    }
}
