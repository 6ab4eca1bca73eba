pub mod configuration;
pub mod database;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
mod startup;
pub mod telemetry;


pub use configuration::get_configuration;
pub use error::BankingError;
pub use startup::build_app;

pub type Result<T, E = BankingError> = std::result::Result<T, E>;
