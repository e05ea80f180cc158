//! Command implementations.

/// Translation command handler.
pub mod translate;

/// Usage, version and language listing.
pub mod usage;
