use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::CustomerError;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Shortest customer identifier accepted at construction.
pub const MIN_CUSTOMER_ID_LEN: usize = 3;

/// Customer identifier.
///
/// Always at least [`MIN_CUSTOMER_ID_LEN`] characters long. The raw value is
/// kept as given; surrounding whitespace counts toward the length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerId(String);

impl CustomerId {
    pub fn parse(id: impl Into<String>) -> Result<Self, CustomerError> {
        let id = id.into();
        if id.is_empty() || id.chars().count() < MIN_CUSTOMER_ID_LEN {
            return Err(CustomerError::InvalidCustomerId {
                value: id,
                min_len: MIN_CUSTOMER_ID_LEN,
            });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CustomerId {
    type Error = CustomerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CustomerId> for String {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an account held elsewhere. Opaque, never validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Customer email address. Empty when not on file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(pub String);

impl Email {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Customer phone number. Empty when not on file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(pub String);

impl PhoneNumber {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_minimum_length() {
        assert!(CustomerId::parse("C01").is_ok());
        assert!(CustomerId::parse("C0001").is_ok());

        let result = CustomerId::parse("C1");
        assert!(matches!(
            result.unwrap_err(),
            CustomerError::InvalidCustomerId { ref value, min_len: 3 } if value == "C1"
        ));
    }

    #[test]
    fn test_customer_id_empty_fails() {
        assert!(matches!(
            CustomerId::parse("").unwrap_err(),
            CustomerError::InvalidCustomerId { .. }
        ));
    }

    #[test]
    fn test_customer_id_length_is_not_trimmed() {
        // whitespace counts toward the minimum
        let id = CustomerId::parse(" C1").unwrap();
        assert_eq!(id.as_str(), " C1");
    }

    #[test]
    fn test_customer_id_counts_characters_not_bytes() {
        // two characters, four bytes
        assert!(CustomerId::parse("éé").is_err());
        assert!(CustomerId::parse("ééé").is_ok());
    }

    #[test]
    fn test_customer_id_deserialize_validates() {
        let ok: CustomerId = serde_json::from_str("\"C001\"").unwrap();
        assert_eq!(ok.as_str(), "C001");

        let bad: Result<CustomerId, _> = serde_json::from_str("\"C1\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_contact_fields_default_to_empty() {
        assert!(Email::default().is_empty());
        assert!(PhoneNumber::default().is_empty());
        assert_eq!(Email::default().as_str(), "");
    }

    #[test]
    fn test_account_id_conversions() {
        let from_str: AccountId = "ACC001".into();
        let from_string: AccountId = String::from("ACC001").into();
        assert_eq!(from_str, from_string);
        assert_eq!(from_str.to_string(), "ACC001");
    }
}
