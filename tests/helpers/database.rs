use anyhow::Result;
use sqlx::{Connection, Executor, PgConnection, PgPool};

use banking::{
    configuration::DatabaseSettings,
    database::{CustomerDatabase, CustomerRepository},
    models::{Customer, NewCustomer},
};

pub async fn configure_database(config: &DatabaseSettings) -> PgPool {
    let mut connection = PgConnection::connect_with(&config.without_db())
        .await
        .expect("failed to connect to database");
    connection
        .execute(&*format!(r#"CREATE DATABASE "{}";"#, config.database_name))
        .await
        .expect("failed to create database");

    let pool = PgPool::connect_with(config.with_db())
        .await
        .expect("failed to connect to database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run database migrations");
    pool
}

pub async fn insert_customer(pool: &PgPool, first_name: &str, last_name: &str) -> Result<Customer> {
    let customer = CustomerDatabase::new(pool.clone())
        .insert(&NewCustomer::new(first_name, last_name))
        .await?;
    Ok(customer)
}

pub async fn fetch_customer(pool: &PgPool, id: i32) -> Result<Option<Customer>> {
    let customer = CustomerDatabase::new(pool.clone()).find_by_id(id).await?;
    Ok(customer)
}
