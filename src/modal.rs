//! Create/edit modal state machine.
//!
//! The controller is `Closed` or `Open` with a mode and a draft. Drafts are
//! purely local: an edit draft is a value copy of the selected resource, and
//! nothing outside the modal sees field edits until a submission succeeds
//! and the store refetches. There is no terminal state; the same controller
//! serves any number of create/edit cycles.

use crate::error::{Result, ShopdeskError};
use crate::types::{Draft, Resource};

/// What an open modal is doing: creating a new resource or editing the one
/// addressed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<D> {
    Closed,
    Open { mode: ModalMode, draft: D },
}

pub struct ModalController<R: Resource> {
    state: ModalState<R::Draft>,
}

impl<R: Resource> Default for ModalController<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ModalController<R> {
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
        }
    }

    pub fn state(&self) -> &ModalState<R::Draft> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    pub fn mode(&self) -> Option<&ModalMode> {
        match &self.state {
            ModalState::Open { mode, .. } => Some(mode),
            ModalState::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&R::Draft> {
        match &self.state {
            ModalState::Open { draft, .. } => Some(draft),
            ModalState::Closed => None,
        }
    }

    /// `Closed → Open(Create)` with field defaults.
    pub fn open_create(&mut self) {
        self.state = ModalState::Open {
            mode: ModalMode::Create,
            draft: R::Draft::default(),
        };
    }

    /// `Closed → Open(Edit)` with an independent value copy of `resource`.
    pub fn open_edit(&mut self, resource: &R) {
        self.state = ModalState::Open {
            mode: ModalMode::Edit {
                id: resource.id().to_string(),
            },
            draft: resource.to_draft(),
        };
    }

    /// Replace exactly one draft field from raw form input. Numeric coercion
    /// happens in the draft; on failure the draft is unchanged and the modal
    /// stays open.
    pub fn edit_field(&mut self, field: &str, value: &str) -> Result<()> {
        match &mut self.state {
            ModalState::Open { draft, .. } => draft.set_field(field, value),
            ModalState::Closed => Err(ShopdeskError::Other(
                "no draft is open for editing".to_string(),
            )),
        }
    }

    /// `Open → Closed`, discarding the draft. No network call, no store
    /// mutation.
    pub fn cancel(&mut self) {
        self.state = ModalState::Closed;
    }

    /// `Open → Closed` after a successful submission; the draft is
    /// discarded. On submission failure this is not called and the draft is
    /// retained for correction and resubmit.
    pub fn complete_submit(&mut self) {
        self.state = ModalState::Closed;
    }
}
