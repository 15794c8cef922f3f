use std::fmt;

use super::commands::{CustomerCommand, UpdateDetails};
use super::errors::CustomerError;
use super::snapshot::CustomerInfo;
use super::value_objects::{AccountId, CustomerId, Email, PhoneNumber};

// ============================================================================
// Customer Aggregate - Business Logic
// ============================================================================

/// A bank customer and the accounts linked to it.
///
/// `customer_id` is fixed at construction. `accounts` keeps insertion order
/// and never holds the same identifier twice.
#[derive(Clone, PartialEq, Eq)]
pub struct Customer {
    customer_id: CustomerId,
    name: String,
    phone: PhoneNumber,
    email: Email,
    accounts: Vec<AccountId>,
}

impl Customer {
    /// Create a customer, validating the id first and then the name.
    ///
    /// The name is stored trimmed. Missing contact details are stored empty.
    pub fn create(
        customer_id: impl Into<String>,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Self, CustomerError> {
        let customer_id = CustomerId::parse(customer_id).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected customer");
        })?;

        let name = name.trim();
        if name.is_empty() {
            tracing::warn!(customer_id = %customer_id, "Rejected customer: empty name");
            return Err(CustomerError::EmptyName);
        }

        let customer = Self {
            customer_id,
            name: name.to_string(),
            phone: phone.map(PhoneNumber::new).unwrap_or_default(),
            email: email.map(Email::new).unwrap_or_default(),
            accounts: Vec::new(),
        };

        tracing::debug!(
            customer_id = %customer.customer_id,
            name = %customer.name,
            "Customer created"
        );

        Ok(customer)
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn accounts(&self) -> &[AccountId] {
        &self.accounts
    }

    pub fn has_account(&self, account_id: &AccountId) -> bool {
        self.accounts.contains(account_id)
    }

    /// Apply the fields set in `update`. Always succeeds.
    ///
    /// A new name is trimmed but not checked for emptiness.
    pub fn update_details(&mut self, update: UpdateDetails) -> bool {
        let UpdateDetails { name, phone, email } = update;

        if let Some(name) = name {
            let name = name.trim();
            if name.is_empty() {
                tracing::warn!(customer_id = %self.customer_id, "Customer name updated to empty");
            }
            self.name = name.to_string();
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        if let Some(email) = email {
            self.email = email;
        }

        tracing::debug!(customer_id = %self.customer_id, "Customer details updated");
        true
    }

    /// Link an account. Returns `false` if it was already linked.
    pub fn link_account(&mut self, account_id: impl Into<AccountId>) -> bool {
        let account_id = account_id.into();

        if self.has_account(&account_id) {
            tracing::debug!(
                customer_id = %self.customer_id,
                account_id = %account_id,
                "Account already linked"
            );
            return false;
        }

        tracing::debug!(
            customer_id = %self.customer_id,
            account_id = %account_id,
            "Account linked"
        );
        self.accounts.push(account_id);
        true
    }

    /// Unlink an account. Returns `false` if it was not linked.
    pub fn unlink_account(&mut self, account_id: impl Into<AccountId>) -> bool {
        let account_id = account_id.into();

        match self.accounts.iter().position(|a| *a == account_id) {
            Some(index) => {
                self.accounts.remove(index);
                tracing::debug!(
                    customer_id = %self.customer_id,
                    account_id = %account_id,
                    "Account unlinked"
                );
                true
            }
            None => {
                tracing::debug!(
                    customer_id = %self.customer_id,
                    account_id = %account_id,
                    "Account not linked"
                );
                false
            }
        }
    }

    pub fn execute(&mut self, command: CustomerCommand) -> bool {
        match command {
            CustomerCommand::UpdateDetails(update) => self.update_details(update),
            CustomerCommand::LinkAccount { account_id } => self.link_account(account_id),
            CustomerCommand::UnlinkAccount { account_id } => self.unlink_account(account_id),
        }
    }

    /// Detached snapshot of the current record.
    pub fn get_info(&self) -> CustomerInfo {
        CustomerInfo::from(self)
    }
}

impl From<&Customer> for CustomerInfo {
    fn from(customer: &Customer) -> Self {
        Self {
            customer_id: customer.customer_id.clone(),
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            email: customer.email.clone(),
            accounts: customer.accounts.clone(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer({}, {}, Accounts: {})",
            self.customer_id,
            self.name,
            self.accounts.len()
        )
    }
}

impl fmt::Debug for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accounts: Vec<&str> = self.accounts.iter().map(AccountId::as_str).collect();
        write!(
            f,
            "Customer(customer_id='{}', name='{}', phone='{}', email='{}', accounts={:?})",
            self.customer_id, self.name, self.phone, self.email, accounts
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
