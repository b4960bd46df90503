//! Storage contract for entries.
//!
//! The entry service only talks to persistence through [`EntryStore`]. The relational
//! implementation lives in [`crate::db`]; tests use an in-memory recorder.

use crate::errors::Result;
use crate::models::{Entry, EntryFilter, EntryStatus, EntryType, NewEntry};
use rust_decimal::Decimal;

/// Persistence operations the entry service relies on.
///
/// Errors are returned as they come from the backend; callers add no retries.
#[allow(async_fn_in_trait)]
pub trait EntryStore {
    /// Stores a new entry and returns it with its assigned id and registration date.
    async fn insert(&self, entry: NewEntry) -> Result<Entry>;

    /// Rewrites every mutable field of the stored entry with the same id.
    ///
    /// The registration date is never changed.
    async fn update(&self, entry: Entry) -> Result<Entry>;

    /// Removes the stored entry.
    async fn delete(&self, entry: &Entry) -> Result<()>;

    /// Looks an entry up by id; a missing id is `Ok(None)`.
    async fn find_by_id(&self, id: i64) -> Result<Option<Entry>>;

    /// Returns entries matching every criterion set in `filter`.
    async fn find(&self, filter: &EntryFilter) -> Result<Vec<Entry>>;

    /// Sums `amount` over the user's entries with the given type and status.
    ///
    /// Returns `None` when no entry matches, which is not the same as a sum of zero.
    async fn sum_amount(
        &self,
        user_id: i64,
        entry_type: EntryType,
        status: EntryStatus,
    ) -> Result<Option<Decimal>>;
}
