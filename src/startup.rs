use actix_web::{dev::Server, web, App, HttpServer};
use sqlx::PgPool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use crate::{database::CustomerDatabase, routes::*, services::CustomerService};

pub fn build_app(listener: TcpListener, connection: PgPool) -> Result<Server, std::io::Error> {
    let service = web::Data::new(CustomerService::new(CustomerDatabase::new(connection)));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(service.clone())
            .route("/health_check", web::get().to(health_check))
            .configure(customer_routes::<CustomerDatabase>)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
