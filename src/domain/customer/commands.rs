use super::value_objects::{AccountId, Email, PhoneNumber};

// ============================================================================
// Customer Domain Commands
// ============================================================================

/// Partial update of a customer's contact details.
///
/// Only fields set to `Some` are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDetails {
    pub name: Option<String>,
    pub phone: Option<PhoneNumber>,
    pub email: Option<Email>,
}

impl UpdateDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(PhoneNumber::new(phone));
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(Email::new(email));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerCommand {
    UpdateDetails(UpdateDetails),
    LinkAccount {
        account_id: AccountId,
    },
    UnlinkAccount {
        account_id: AccountId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_details_builder() {
        let update = UpdateDetails::new()
            .with_phone("+91-9999999999")
            .with_email("john.new@email.com");

        assert_eq!(update.name, None);
        assert_eq!(update.phone, Some(PhoneNumber::new("+91-9999999999")));
        assert_eq!(update.email, Some(Email::new("john.new@email.com")));
        assert!(!update.is_empty());
    }

    #[test]
    fn test_default_update_is_empty() {
        assert!(UpdateDetails::default().is_empty());
    }
}
