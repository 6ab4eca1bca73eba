use reqwest::Client;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::net::TcpListener;
use uuid::Uuid;

use crate::helpers::{configure_database, TRACING};

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

/// Spawns the app against a freshly created and migrated database
pub async fn spawn_app() -> TestApp {
    let mut configuration = banking::get_configuration().expect("failed to read configuration");
    configuration.set_database_name(Uuid::new_v4().to_string());

    let pool = configure_database(&configuration.database).await;
    start(pool)
}

/// Spawns the app with a pool that never connects, only usable for routes
/// which don't touch the database
pub async fn spawn_app_without_database() -> TestApp {
    let configuration = banking::get_configuration().expect("failed to read configuration");
    let pool = PgPoolOptions::new().connect_lazy_with(configuration.database.with_db());
    start(pool)
}

fn start(pool: PgPool) -> TestApp {
    lazy_static::initialize(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let server = banking::build_app(listener, pool.clone()).expect("failed to bind address");

    let _ = tokio::spawn(server);
    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        db_pool: pool,
        client: Client::new(),
    }
}
