use serde::{Deserialize, Serialize};

use super::value_objects::{AccountId, CustomerId, Email, PhoneNumber};

// ============================================================================
// Customer Snapshot - detached read model
// ============================================================================

/// Point-in-time copy of a customer record.
///
/// Owns its data outright, so later changes to the customer are not
/// reflected here and changes made here never reach the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub customer_id: CustomerId,
    pub name: String,
    pub phone: PhoneNumber,
    pub email: Email,
    pub accounts: Vec<AccountId>,
}
