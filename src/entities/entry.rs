//! Entry entity - A single income or expense record owned by a user.
//!
//! Each entry has a description, `month`/`year` of competence, a decimal `amount`,
//! an [`EntryType`], a settlement [`EntryStatus`], the owning `user_id`, and the
//! `registration_date` written once when the row is inserted.
use crate::errors::Error;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Entry database model. A value of this type has always been persisted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    /// Store-assigned identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Free text describing the entry (e.g. "Salary", "Rent")
    pub description: String,
    /// Month of competence, 1 through 12
    pub month: i32,
    /// Four-digit year of competence
    pub year: i32,
    /// Entry amount, always positive; the sign comes from `entry_type`
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub amount: Decimal,
    /// Income or expense
    pub entry_type: EntryType,
    /// Settlement status
    pub status: EntryStatus,
    /// Owning user
    pub user_id: i64,
    /// Day the entry was first stored
    pub registration_date: Date,
}

/// Whether an entry adds to or takes from the owner's balance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    /// Money coming in
    #[sea_orm(string_value = "INCOME")]
    Income,
    /// Money going out
    #[sea_orm(string_value = "EXPENSE")]
    Expense,
}

/// Settlement status of an entry
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    /// Not yet realized
    #[default]
    #[sea_orm(string_value = "PENDING")]
    Pending,
    /// Realized; counted in balances
    #[sea_orm(string_value = "SETTLED")]
    Settled,
    /// Voided
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

fn parse_enum<T: ActiveEnum<Value = String>>(kind: &'static str, s: &str) -> Result<T, Error> {
    T::try_from_value(&s.trim().to_uppercase()).map_err(|_| Error::InvalidEnum {
        kind,
        value: s.to_string(),
    })
}

impl FromStr for EntryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_enum("entry type", s)
    }
}

impl FromStr for EntryStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_enum("entry status", s)
    }
}

/// Defines relationships between Entry and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each entry belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_case_insensitively() {
        assert_eq!("settled".parse::<EntryStatus>().ok(), Some(EntryStatus::Settled));
        assert_eq!(" Pending ".parse::<EntryStatus>().ok(), Some(EntryStatus::Pending));
        assert_eq!("CANCELLED".parse::<EntryStatus>().ok(), Some(EntryStatus::Cancelled));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = "done".parse::<EntryStatus>();
        assert!(matches!(
            err,
            Err(Error::InvalidEnum { kind: "entry status", ref value }) if value == "done"
        ));
    }

    #[test]
    fn test_type_parses_stored_value() {
        assert_eq!(EntryType::Income.to_value(), "INCOME");
        assert_eq!(EntryType::Expense.to_value().parse::<EntryType>().ok(), Some(EntryType::Expense));
        assert_eq!("expense".parse::<EntryType>().ok(), Some(EntryType::Expense));
    }

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(EntryStatus::default(), EntryStatus::Pending);
    }
}
