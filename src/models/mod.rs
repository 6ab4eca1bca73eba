mod customer;

pub use customer::{Customer, CustomerUpdate, NewCustomer};
