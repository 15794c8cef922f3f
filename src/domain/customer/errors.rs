// ============================================================================
// Customer Validation Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomerError {
    #[error("Customer ID must be at least {min_len} characters: '{value}'")]
    InvalidCustomerId { value: String, min_len: usize },

    #[error("Customer name cannot be empty")]
    EmptyName,
}
