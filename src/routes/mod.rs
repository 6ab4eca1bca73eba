mod customer;
mod health_check;

pub use customer::*;
pub use health_check::*;
