//! Framework-agnostic entry logic: validation rules, the storage contract, and the service.

/// Entry service orchestrating validation, persistence, and balances
pub mod service;
/// Storage contract the service depends on
pub mod store;
/// Ordered, fail-fast entry validation
pub mod validation;
