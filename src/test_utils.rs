//! Shared test utilities for the finances crate.
//!
//! This module provides helpers for setting up test databases, fixtures with sensible
//! defaults, and [`RecordingStore`], an in-memory [`EntryStore`] that logs every call.

use crate::{
    core::{store::EntryStore, validation::validate},
    entities::user,
    errors::Result,
    models::{Entry, EntryDraft, EntryFilter, EntryStatus, EntryType, NewEntry, UserRef},
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::{Mutex, PoisonError};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Inserts a user directly; user management is outside the entry service.
pub async fn create_test_user(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
) -> Result<user::Model> {
    user::ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Sets up a test database with one user.
/// Returns (db, user) for common test scenarios.
pub async fn setup_with_user() -> Result<(DatabaseConnection, user::Model)> {
    let db = setup_test_db().await?;
    let user = create_test_user(&db, "Test User", "test@example.com").await?;
    Ok((db, user))
}

/// A draft that passes validation.
///
/// # Defaults
/// * `description`: "Salary"
/// * `month` / `year`: 1 / 2020
/// * `amount`: 10.00
/// * `entry_type`: income
#[must_use]
pub fn sample_draft(user_id: i64) -> EntryDraft {
    EntryDraft {
        description: Some("Salary".to_string()),
        month: Some(1),
        year: Some(2020),
        owner: Some(UserRef::new(user_id)),
        amount: Some(Decimal::new(1000, 2)),
        entry_type: Some(EntryType::Income),
    }
}

/// Stores a valid entry with custom description, type, and month.
pub async fn create_test_entry(
    db: &DatabaseConnection,
    user_id: i64,
    description: &str,
    entry_type: EntryType,
    month: i32,
) -> Result<Entry> {
    let draft = EntryDraft {
        description: Some(description.to_string()),
        month: Some(month),
        entry_type: Some(entry_type),
        ..sample_draft(user_id)
    };
    db.insert(validate(&draft)?).await
}

/// One call received by a [`RecordingStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    /// `insert`
    Insert,
    /// `update` with the entry it received
    Update(Entry),
    /// `delete` of the given id
    Delete(i64),
    /// `find_by_id`
    FindById(i64),
    /// `find`
    Find(EntryFilter),
    /// `sum_amount`
    Sum(i64, EntryType, EntryStatus),
}

/// In-memory [`EntryStore`] that records every call it receives.
#[derive(Debug, Default)]
pub struct RecordingStore {
    entries: Mutex<Vec<Entry>>,
    calls: Mutex<Vec<StoreCall>>,
}

impl RecordingStore {
    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: StoreCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    fn with_entries<T>(&self, f: impl FnOnce(&mut Vec<Entry>) -> T) -> T {
        f(&mut self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl EntryStore for RecordingStore {
    async fn insert(&self, entry: NewEntry) -> Result<Entry> {
        self.record(StoreCall::Insert);
        Ok(self.with_entries(|entries| {
            let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
            let stored = Entry {
                id: next_id,
                description: entry.description,
                month: entry.month,
                year: entry.year,
                amount: entry.amount,
                entry_type: entry.entry_type,
                status: entry.status,
                user_id: entry.user_id,
                registration_date: chrono::Utc::now().date_naive(),
            };
            entries.push(stored.clone());
            stored
        }))
    }

    async fn update(&self, entry: Entry) -> Result<Entry> {
        self.record(StoreCall::Update(entry.clone()));
        Ok(self.with_entries(|entries| {
            match entries.iter_mut().find(|e| e.id == entry.id) {
                Some(existing) => {
                    *existing = Entry {
                        registration_date: existing.registration_date,
                        ..entry
                    };
                    existing.clone()
                }
                None => entry,
            }
        }))
    }

    async fn delete(&self, entry: &Entry) -> Result<()> {
        self.record(StoreCall::Delete(entry.id));
        self.with_entries(|entries| entries.retain(|e| e.id != entry.id));
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Entry>> {
        self.record(StoreCall::FindById(id));
        Ok(self.with_entries(|entries| entries.iter().find(|e| e.id == id).cloned()))
    }

    async fn find(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        self.record(StoreCall::Find(filter.clone()));
        Ok(self.with_entries(|entries| {
            entries
                .iter()
                .filter(|e| filter.matches(e))
                .cloned()
                .collect()
        }))
    }

    async fn sum_amount(
        &self,
        user_id: i64,
        entry_type: EntryType,
        status: EntryStatus,
    ) -> Result<Option<Decimal>> {
        self.record(StoreCall::Sum(user_id, entry_type, status));
        Ok(self.with_entries(|entries| {
            entries
                .iter()
                .filter(|e| e.user_id == user_id && e.entry_type == entry_type && e.status == status)
                .map(|e| e.amount)
                .reduce(|acc, amount| acc + amount)
        }))
    }
}
