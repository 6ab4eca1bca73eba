use tracing::info;

use crate::{
    database::CustomerRepository,
    models::{Customer, CustomerUpdate, NewCustomer},
    BankingError, Result,
};

pub struct CustomerService<DB> {
    repository: DB,
}

impl<DB: CustomerRepository> CustomerService<DB> {
    pub fn new(repository: DB) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self), fields(service = "customer"))]
    pub async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer> {
        let customer = self.repository.insert(customer).await?;
        info!(id = customer.id, "created customer");
        Ok(customer)
    }

    #[tracing::instrument(skip(self), fields(service = "customer"))]
    pub async fn get_customer(&self, id: i32) -> Result<Customer> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BankingError::CustomerNotFound(id))
    }

    #[tracing::instrument(skip(self), fields(service = "customer"))]
    pub async fn get_customers(&self) -> Result<Vec<Customer>> {
        self.repository.find_all().await
    }

    /// Applies whichever of the two names are present.
    ///
    /// Exactly one row must change for the update to succeed, so an update
    /// carrying neither name fails with `CustomerNotFound` even when the
    /// customer exists.
    #[tracing::instrument(skip(self), fields(service = "customer"))]
    pub async fn update_customer(&self, id: i32, update: &CustomerUpdate) -> Result<String> {
        let count = match (update.first_name.as_deref(), update.last_name.as_deref()) {
            (Some(first_name), Some(last_name)) => {
                self.repository
                    .update_both(id, first_name, last_name)
                    .await?
            }
            (Some(first_name), None) => self.repository.update_first_name(id, first_name).await?,
            (None, Some(last_name)) => self.repository.update_last_name(id, last_name).await?,
            (None, None) => 0,
        };

        if count != 1 {
            return Err(BankingError::CustomerNotFound(id));
        }

        Ok(format!("Customer with id {} update successful", id))
    }
}
