mod customer;

pub use customer::{CustomerDatabase, CustomerRepository};
