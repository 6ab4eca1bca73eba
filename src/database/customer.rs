use async_trait::async_trait;
use sqlx::{query, query_as, PgPool};

use crate::{
    models::{Customer, NewCustomer},
    Result,
};

/// Data access for the `customers` table
///
/// Each update is its own fixed statement rather than one built at runtime,
/// the caller picks the one matching the fields it has. The `u64` returned
/// by them is the number of affected rows.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn insert(&self, customer: &NewCustomer) -> Result<Customer>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>>;
    async fn find_all(&self) -> Result<Vec<Customer>>;
    async fn update_both(&self, id: i32, first_name: &str, last_name: &str) -> Result<u64>;
    async fn update_first_name(&self, id: i32, first_name: &str) -> Result<u64>;
    async fn update_last_name(&self, id: i32, last_name: &str) -> Result<u64>;
}

#[derive(Debug, Clone)]
pub struct CustomerDatabase {
    pool: PgPool,
}

impl CustomerDatabase {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for CustomerDatabase {
    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn insert(&self, customer: &NewCustomer) -> Result<Customer> {
        let customer = query_as::<_, Customer>(
            r#"
            INSERT INTO customers ( first_name, last_name )
            VALUES ( $1, $2 )
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(customer.first_name.as_deref())
        .bind(customer.last_name.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(customer)
    }

    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>> {
        let customer = query_as::<_, Customer>(
            r#"
            SELECT id, first_name, last_name FROM customers WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(customer)
    }

    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn find_all(&self) -> Result<Vec<Customer>> {
        let customers = query_as::<_, Customer>(
            r#"
            SELECT id, first_name, last_name FROM customers ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(customers)
    }

    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn update_both(&self, id: i32, first_name: &str, last_name: &str) -> Result<u64> {
        let result = query(
            r#"
            UPDATE customers
            SET first_name = $1, last_name = $2
            WHERE id = $3
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn update_first_name(&self, id: i32, first_name: &str) -> Result<u64> {
        let result = query(
            r#"
            UPDATE customers
            SET first_name = $1
            WHERE id = $2
            "#,
        )
        .bind(first_name)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    #[tracing::instrument(skip(self), fields(repository = "customer"))]
    async fn update_last_name(&self, id: i32, last_name: &str) -> Result<u64> {
        let result = query(
            r#"
            UPDATE customers
            SET last_name = $1
            WHERE id = $2
            "#,
        )
        .bind(last_name)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
