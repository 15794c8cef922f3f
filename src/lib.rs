pub mod domain;

pub use domain::customer::{
    AccountId, Customer, CustomerCommand, CustomerError, CustomerId, CustomerInfo, Email,
    PhoneNumber, UpdateDetails, MIN_CUSTOMER_ID_LEN,
};
