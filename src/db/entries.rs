//! Relational entry store backed by `SeaORM`.
//!
//! [`EntryStore`] is implemented directly on [`DatabaseConnection`], so the service can be
//! built from the same connection the rest of the application uses.

use crate::{
    core::store::EntryStore,
    entities::{Entry, entry},
    errors::Result,
    models::{EntryFilter, EntryStatus, EntryType, NewEntry},
};
use rust_decimal::Decimal;
use sea_orm::{
    QueryOrder, QuerySelect, Set,
    prelude::*,
    sea_query::Expr,
};
use tracing::{debug, instrument};

impl EntryStore for DatabaseConnection {
    #[instrument(skip(self, new_entry), fields(user_id = new_entry.user_id))]
    async fn insert(&self, new_entry: NewEntry) -> Result<entry::Model> {
        let today = chrono::Utc::now().date_naive();
        let model = entry::ActiveModel {
            description: Set(new_entry.description),
            month: Set(new_entry.month),
            year: Set(new_entry.year),
            amount: Set(new_entry.amount),
            entry_type: Set(new_entry.entry_type),
            status: Set(new_entry.status),
            user_id: Set(new_entry.user_id),
            registration_date: Set(today),
            ..Default::default()
        };

        let inserted = model.insert(self).await?;
        debug!(entry_id = inserted.id, "Inserted entry");
        Ok(inserted)
    }

    #[instrument(skip(self, stored), fields(entry_id = stored.id))]
    async fn update(&self, stored: entry::Model) -> Result<entry::Model> {
        let mut active: entry::ActiveModel = stored.clone().into();
        active.description = Set(stored.description);
        active.month = Set(stored.month);
        active.year = Set(stored.year);
        active.amount = Set(stored.amount);
        active.entry_type = Set(stored.entry_type);
        active.status = Set(stored.status);
        active.user_id = Set(stored.user_id);

        active.update(self).await.map_err(Into::into)
    }

    #[instrument(skip(self, stored), fields(entry_id = stored.id))]
    async fn delete(&self, stored: &entry::Model) -> Result<()> {
        let result = Entry::delete_by_id(stored.id).exec(self).await?;
        debug!(rows_affected = result.rows_affected, "Deleted entry");
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<entry::Model>> {
        Entry::find_by_id(id).one(self).await.map_err(Into::into)
    }

    /// Exact criteria run in SQL. The description is matched afterwards with
    /// [`EntryFilter::description_matches`]: `SQLite` only folds ASCII case, and the needle
    /// must not be read as a `LIKE` pattern.
    #[instrument(skip(self))]
    async fn find(&self, filter: &EntryFilter) -> Result<Vec<entry::Model>> {
        let mut query = Entry::find();

        if let Some(month) = filter.month {
            query = query.filter(entry::Column::Month.eq(month));
        }
        if let Some(year) = filter.year {
            query = query.filter(entry::Column::Year.eq(year));
        }
        if let Some(user_id) = filter.user_id {
            query = query.filter(entry::Column::UserId.eq(user_id));
        }
        if let Some(entry_type) = filter.entry_type {
            query = query.filter(entry::Column::EntryType.eq(entry_type));
        }
        if let Some(status) = filter.status {
            query = query.filter(entry::Column::Status.eq(status));
        }

        let rows = query
            .order_by_asc(entry::Column::Year)
            .order_by_asc(entry::Column::Month)
            .order_by_asc(entry::Column::Id)
            .all(self)
            .await?;

        Ok(rows
            .into_iter()
            .filter(|row| filter.description_matches(&row.description))
            .collect())
    }

    #[instrument(skip(self))]
    async fn sum_amount(
        &self,
        user_id: i64,
        entry_type: EntryType,
        status: EntryStatus,
    ) -> Result<Option<Decimal>> {
        // SUM over zero rows yields a single NULL row
        let total: Option<Option<Decimal>> = Entry::find()
            .select_only()
            .column_as(Expr::col(entry::Column::Amount).sum(), "total")
            .filter(entry::Column::UserId.eq(user_id))
            .filter(entry::Column::EntryType.eq(entry_type))
            .filter(entry::Column::Status.eq(status))
            .into_tuple()
            .one(self)
            .await?;

        Ok(total.flatten())
    }
}
