//! Records exchanged with callers of the entry service.
//!
//! An entry exists in one of three shapes:
//! - [`EntryDraft`]: what a caller hands in. Every field is optional and nothing is checked yet.
//! - [`NewEntry`]: a draft that passed validation, ready to be inserted.
//! - [`Entry`]: a stored row. It always carries the id the store assigned.
//!
//! Operations that only make sense on stored entries (update, delete, status change) take
//! [`Entry`], so an entry that was never saved cannot reach them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use crate::entities::entry::{EntryStatus, EntryType, Model as Entry};
use crate::entities::user;

/// Reference to the user owning an entry.
///
/// Callers may send a user that was never stored (no id); such a reference counts as no owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// Id of the referenced user, if it has one
    pub id: Option<i64>,
}

impl UserRef {
    /// Reference to a stored user.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self { id: Some(id) }
    }
}

impl From<&user::Model> for UserRef {
    fn from(user: &user::Model) -> Self {
        Self::new(user.id)
    }
}

/// An entry as supplied by a caller, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    /// Free text describing the entry
    pub description: Option<String>,
    /// Month of competence
    pub month: Option<i32>,
    /// Year of competence
    pub year: Option<i32>,
    /// Owning user
    pub owner: Option<UserRef>,
    /// Entry amount
    pub amount: Option<Decimal>,
    /// Income or expense
    pub entry_type: Option<EntryType>,
}

impl From<&Entry> for EntryDraft {
    fn from(entry: &Entry) -> Self {
        Self {
            description: Some(entry.description.clone()),
            month: Some(entry.month),
            year: Some(entry.year),
            owner: Some(UserRef::new(entry.user_id)),
            amount: Some(entry.amount),
            entry_type: Some(entry.entry_type),
        }
    }
}

/// A validated entry that has not been stored yet. Always starts as [`EntryStatus::Pending`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    /// Description, already known to be non-blank
    pub description: String,
    /// Month in 1..=12
    pub month: i32,
    /// Four-digit year
    pub year: i32,
    /// Strictly positive amount
    pub amount: Decimal,
    /// Income or expense
    pub entry_type: EntryType,
    /// Status the entry is stored with
    pub status: EntryStatus,
    /// Owning user id
    pub user_id: i64,
}

/// Search criteria for entries. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFilter {
    /// Case-insensitive substring of the description
    pub description: Option<String>,
    /// Exact month
    pub month: Option<i32>,
    /// Exact year
    pub year: Option<i32>,
    /// Owning user id
    pub user_id: Option<i64>,
    /// Income or expense
    pub entry_type: Option<EntryType>,
    /// Settlement status
    pub status: Option<EntryStatus>,
}

impl EntryFilter {
    /// Filter matching every entry of one user.
    #[must_use]
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    /// Case-insensitive substring test on a description, with full Unicode case folding.
    ///
    /// The needle is plain text: `%` and `_` only match themselves.
    #[must_use]
    pub fn description_matches(&self, description: &str) -> bool {
        self.description.as_deref().is_none_or(|needle| {
            description
                .to_lowercase()
                .contains(&needle.to_lowercase())
        })
    }

    /// Returns true when `entry` satisfies every criterion that is set.
    ///
    /// Gives the same answer as the database store, for stores that filter in memory.
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        self.description_matches(&entry.description)
            && self.month.is_none_or(|m| entry.month == m)
            && self.year.is_none_or(|y| entry.year == y)
            && self.user_id.is_none_or(|u| entry.user_id == u)
            && self.entry_type.is_none_or(|t| entry.entry_type == t)
            && self.status.is_none_or(|s| entry.status == s)
    }
}
