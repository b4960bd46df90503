//! Entry validation rules.
//!
//! Rules are checked in a fixed order and validation stops at the first one that fails:
//! description, month, year, owner, amount, type. Callers get back exactly one
//! [`ValidationError`] describing that rule, or a [`NewEntry`] ready to be stored.

use crate::models::{EntryDraft, EntryStatus, NewEntry};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which rule an entry broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    /// Description missing or blank
    BadDescription,
    /// Month missing or outside 1..=12
    BadMonth,
    /// Year missing or not four digits
    BadYear,
    /// No owner, or an owner without an id
    MissingOwner,
    /// Amount missing, zero, or negative
    BadAmount,
    /// Entry type missing
    MissingType,
}

impl ViolationKind {
    /// User-facing message for this rule.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::BadDescription => "Provide a valid description.",
            Self::BadMonth => "Provide a valid month.",
            Self::BadYear => "Provide a valid year.",
            Self::MissingOwner => "Provide a user.",
            Self::BadAmount => "Provide a valid amount.",
            Self::MissingType => "Provide an entry type.",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::BadDescription => "BAD_DESCRIPTION",
            Self::BadMonth => "BAD_MONTH",
            Self::BadYear => "BAD_YEAR",
            Self::MissingOwner => "MISSING_OWNER",
            Self::BadAmount => "BAD_AMOUNT",
            Self::MissingType => "MISSING_TYPE",
        };
        f.write_str(code)
    }
}

/// The first rule an entry broke. Its message always comes from the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .kind.message())]
pub struct ValidationError {
    /// Machine-readable rule identifier
    pub kind: ViolationKind,
}

impl ValidationError {
    /// Human-readable explanation
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl From<ViolationKind> for ValidationError {
    fn from(kind: ViolationKind) -> Self {
        Self { kind }
    }
}

const VALID_YEARS: std::ops::RangeInclusive<i32> = 1000..=9999;

/// Checks `draft` against every rule, in order, and returns the insertable entry.
///
/// The returned [`NewEntry`] always has [`EntryStatus::Pending`].
///
/// # Errors
/// Returns the [`ValidationError`] for the first rule that fails.
pub fn validate(draft: &EntryDraft) -> Result<NewEntry, ValidationError> {
    let description = draft
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or(ViolationKind::BadDescription)?;

    let month = draft
        .month
        .filter(|m| (1..=12).contains(m))
        .ok_or(ViolationKind::BadMonth)?;

    let year = draft
        .year
        .filter(|y| VALID_YEARS.contains(y))
        .ok_or(ViolationKind::BadYear)?;

    let user_id = draft
        .owner
        .and_then(|owner| owner.id)
        .ok_or(ViolationKind::MissingOwner)?;

    let amount = draft
        .amount
        .filter(|a| *a > Decimal::ZERO)
        .ok_or(ViolationKind::BadAmount)?;

    let entry_type = draft.entry_type.ok_or(ViolationKind::MissingType)?;

    Ok(NewEntry {
        description: description.to_string(),
        month,
        year,
        amount,
        entry_type,
        status: EntryStatus::Pending,
        user_id,
    })
}
