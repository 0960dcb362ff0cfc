//! Application service — SSH key inventory and confirmed deletion.
//!
//! The inventory is the only owner of the working key list. Deleting a key
//! is a two-step exchange: `request_delete` hands out a [`PendingDelete`]
//! ticket, and only `PendingDelete::confirm` reaches the deletion port.
//! Dropping or declining the ticket leaves everything as it was.
//!
//! State lives in `RefCell`s: the inventory is driven from a single
//! cooperative task and borrows are never held across an `.await`.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use anyhow::Result;
use lab_common::SshKey;

use crate::application::ports::{Confirmer, KeyDeleter, ProgressReporter};
use crate::domain::error::KeyError;
use crate::domain::keys::{KeyEntry, KeyId, KeyListView};

/// Result of the interactive delete flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(SshKey),
    /// The user declined or dismissed the confirmation.
    Declined,
    /// Unknown id, or a deletion for this key is already in flight.
    Ignored,
}

/// Working list of the current user's SSH keys, in presentation order.
#[derive(Debug, Default)]
pub struct KeyInventory {
    entries: RefCell<Vec<KeyEntry>>,
    pending: RefCell<HashSet<KeyId>>,
    next_id: Cell<u64>,
}

impl KeyInventory {
    /// Build an inventory from keys reported by the account source.
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = SshKey>) -> Self {
        let inventory = Self::default();
        for key in keys {
            inventory.push(key);
        }
        inventory
    }

    /// Append a key reported by the account source and return its row id.
    pub fn push(&self, key: SshKey) -> KeyId {
        let id = KeyId::new(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.entries.borrow_mut().push(KeyEntry { id, key });
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<KeyEntry> {
        self.entries.borrow().clone()
    }

    #[must_use]
    pub fn keys(&self) -> Vec<SshKey> {
        self.entries.borrow().iter().map(|e| e.key.clone()).collect()
    }

    /// Id of the `nth` (0-based) entry named `name`, in presentation order.
    #[must_use]
    pub fn nth_named(&self, name: &str, nth: usize) -> Option<KeyId> {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.key.name == name)
            .nth(nth)
            .map(|e| e.id)
    }

    #[must_use]
    pub fn is_pending(&self, id: KeyId) -> bool {
        self.pending.borrow().contains(&id)
    }

    /// What the key table should render right now.
    #[must_use]
    pub fn view(&self, guide_url: &str) -> KeyListView {
        KeyListView::from_entries(self.entries(), guide_url)
    }

    /// Start the confirmation step for one row.
    ///
    /// Returns `None` if `id` is unknown or a deletion for it is already
    /// pending. Nothing is mutated and no port is called.
    #[must_use]
    pub fn request_delete(&self, id: KeyId) -> Option<PendingDelete<'_>> {
        let key = self
            .entries
            .borrow()
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.key.clone())?;
        if !self.pending.borrow_mut().insert(id) {
            tracing::debug!(%id, name = %key.name, "delete already pending, ignoring");
            return None;
        }
        Some(PendingDelete {
            inventory: self,
            id,
            key,
        })
    }

    /// Ask for confirmation, then delete the row through `deleter`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::DeleteFailed`] if the deletion port fails (the
    /// list is unchanged and a warning is reported), or the confirmer's
    /// error if no prompt could be shown.
    pub async fn delete_with_confirmation(
        &self,
        id: KeyId,
        confirmer: &impl Confirmer,
        deleter: &impl KeyDeleter,
        reporter: &impl ProgressReporter,
    ) -> Result<DeleteOutcome> {
        let Some(pending) = self.request_delete(id) else {
            return Ok(DeleteOutcome::Ignored);
        };

        let prompt = format!("Confirm deletion of SSH key '{}'?", pending.key().name);
        if !confirmer.confirm(&prompt)? {
            pending.decline();
            return Ok(DeleteOutcome::Declined);
        }

        let name = pending.key().name.clone();
        reporter.step(&format!("deleting SSH key '{name}'..."));
        match pending.confirm(deleter).await {
            Ok(key) => {
                reporter.success(&format!("SSH key '{name}' deleted"));
                Ok(DeleteOutcome::Deleted(key))
            }
            Err(e) => {
                reporter.warn(&format!("SSH key '{name}' was not deleted"));
                Err(e.into())
            }
        }
    }

    fn remove(&self, id: KeyId) {
        self.entries.borrow_mut().retain(|e| e.id != id);
    }

    fn release(&self, id: KeyId) {
        self.pending.borrow_mut().remove(&id);
    }
}

/// A deletion awaiting the user's answer.
///
/// Holding the ticket marks the row as pending; dropping it releases the
/// mark without touching the list.
#[derive(Debug)]
pub struct PendingDelete<'a> {
    inventory: &'a KeyInventory,
    id: KeyId,
    key: SshKey,
}

impl PendingDelete<'_> {
    #[must_use]
    pub fn key(&self) -> &SshKey {
        &self.key
    }

    /// The user declined or dismissed the prompt.
    pub fn decline(self) {
        tracing::debug!(id = %self.id, "delete declined");
    }

    /// The user affirmed: delete through `deleter`, then drop the row.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::DeleteFailed`] if `deleter` fails. The list is
    /// left unchanged and no retry is attempted.
    pub async fn confirm(self, deleter: &impl KeyDeleter) -> Result<SshKey, KeyError> {
        match deleter.delete_key(&self.key).await {
            Ok(()) => {
                self.inventory.remove(self.id);
                Ok(self.key.clone())
            }
            Err(e) => {
                tracing::warn!(id = %self.id, name = %self.key.name, error = %e, "key deletion failed");
                Err(KeyError::DeleteFailed {
                    name: self.key.name.clone(),
                    source: e.into(),
                })
            }
        }
    }
}

impl Drop for PendingDelete<'_> {
    fn drop(&mut self) {
        self.inventory.release(self.id);
    }
}
