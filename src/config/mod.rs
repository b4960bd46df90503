/// Database configuration and connection management
pub mod database;

/// Settings file loading and database URL resolution
pub mod settings;
