// ============================================================================
// Customer Domain - Bank Customer Record
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (CustomerId, AccountId, Email, PhoneNumber)
// - Commands (UpdateDetails, LinkAccount, UnlinkAccount)
// - Errors (CustomerError enum)
// - Aggregate (Customer with its validation rules)
// - Snapshot (CustomerInfo, a detached copy of the record)
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod snapshot;

// Re-export for convenience
pub use value_objects::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use snapshot::*;
