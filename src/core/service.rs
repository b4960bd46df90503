//! Entry business logic - validation before persistence, status changes, and balances.
//!
//! [`EntryService`] is the only component that decides anything: it runs the validation
//! rules before any write, forwards reads to the store untouched, and turns the store's
//! per-type sums into balances. Errors from the store are returned unchanged.
//!
//! Operations that need a stored entry take [`Entry`], which always has an id. An unsaved
//! draft cannot be updated, deleted, or have its status changed:
//!
//! ```
//! # use personal_finances::core::service::EntryService;
//! # use personal_finances::errors::Result;
//! # use personal_finances::models::{Entry, EntryStatus};
//! # async fn demo(service: EntryService<sea_orm::DatabaseConnection>, entry: Entry) -> Result<()> {
//! service.update_status(entry, EntryStatus::Settled).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The same call with a draft is a type error:
//!
//! ```compile_fail,E0308
//! # use personal_finances::core::service::EntryService;
//! # use personal_finances::errors::Result;
//! # use personal_finances::models::{EntryDraft, EntryStatus};
//! # async fn demo(service: EntryService<sea_orm::DatabaseConnection>, entry: EntryDraft) -> Result<()> {
//! service.update_status(entry, EntryStatus::Settled).await?;
//! # Ok(())
//! # }
//! ```

use crate::{
    core::{store::EntryStore, validation::validate},
    errors::Result,
    models::{Entry, EntryDraft, EntryFilter, EntryStatus, EntryType},
};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

/// Orchestrates validation and persistence of entries over an [`EntryStore`].
#[derive(Debug, Clone)]
pub struct EntryService<S> {
    store: S,
}

impl<S: EntryStore> EntryService<S> {
    /// Creates a service over `store`.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Validates `draft` and stores it as a new [`EntryStatus::Pending`] entry.
    ///
    /// The store is not touched when validation fails.
    #[instrument(skip(self, draft))]
    pub async fn save(&self, draft: EntryDraft) -> Result<Entry> {
        let new_entry =
            validate(&draft).inspect_err(|e| warn!(kind = %e.kind, "Rejected new entry"))?;

        let stored = self.store.insert(new_entry).await?;
        info!(entry_id = stored.id, "Saved entry");
        Ok(stored)
    }

    /// Validates a stored entry and writes every field back.
    #[instrument(skip(self, entry), fields(entry_id = entry.id))]
    pub async fn update(&self, mut entry: Entry) -> Result<Entry> {
        let checked = validate(&EntryDraft::from(&entry))
            .inspect_err(|e| warn!(kind = %e.kind, "Rejected entry update"))?;
        entry.description = checked.description;

        let stored = self.store.update(entry).await?;
        debug!("Updated entry");
        Ok(stored)
    }

    /// Deletes a stored entry. No validation runs, so invalid rows can still be removed.
    #[instrument(skip(self, entry), fields(entry_id = entry.id))]
    pub async fn delete(&self, entry: &Entry) -> Result<()> {
        self.store.delete(entry).await?;
        info!("Deleted entry");
        Ok(())
    }

    /// Returns the entries matching `filter`, in the order the store yields them.
    pub async fn find(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        self.store.find(filter).await
    }

    /// Looks an entry up by id; `Ok(None)` when there is no such entry.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Entry>> {
        self.store.find_by_id(id).await
    }

    /// Moves a stored entry to `status` and saves it through [`Self::update`].
    ///
    /// Every other field is validated again, so an invalid entry cannot be settled or
    /// cancelled until it is fixed.
    #[instrument(skip(self, entry), fields(entry_id = entry.id))]
    pub async fn update_status(&self, mut entry: Entry, status: EntryStatus) -> Result<Entry> {
        debug!(from = ?entry.status, to = ?status, "Changing entry status");
        entry.status = status;
        self.update(entry).await
    }

    /// Same as [`Self::update_status`] but takes the status by name, as sent by clients.
    ///
    /// # Errors
    /// [`crate::errors::Error::InvalidEnum`] when `status` names no known status; the store is not touched.
    pub async fn update_status_named(&self, entry: Entry, status: &str) -> Result<Entry> {
        let status = status.parse::<EntryStatus>()?;
        self.update_status(entry, status).await
    }

    /// Sum of the user's settled entries of `entry_type`; zero when there are none.
    #[instrument(skip(self))]
    pub async fn balance(&self, user_id: i64, entry_type: EntryType) -> Result<Decimal> {
        let total = self
            .store
            .sum_amount(user_id, entry_type, EntryStatus::Settled)
            .await?
            .unwrap_or(Decimal::ZERO);
        debug!(%total, "Computed balance");
        Ok(total)
    }

    /// Settled income minus settled expense for the user.
    #[instrument(skip(self))]
    pub async fn net_balance(&self, user_id: i64) -> Result<Decimal> {
        let income = self.balance(user_id, EntryType::Income).await?;
        let expense = self.balance(user_id, EntryType::Expense).await?;
        Ok(income - expense)
    }
}
