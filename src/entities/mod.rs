//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod entry;
pub mod user;

// Re-export specific types to avoid conflicts
pub use entry::{Entity as Entry, EntryStatus, EntryType, Model as EntryModel};
pub use user::{Entity as User, Model as UserModel};
