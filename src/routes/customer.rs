use actix_web::{http::header::ContentType, web, HttpResponse};

use crate::{
    database::CustomerRepository,
    error::error_translator,
    models::{CustomerUpdate, NewCustomer},
    services::CustomerService,
    Result,
};

/// Registers the `/customers` routes for a service backed by `DB`
pub fn customer_routes<DB: CustomerRepository + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .wrap(error_translator())
            .route("", web::post().to(create_customer::<DB>))
            .route("", web::get().to(get_customers::<DB>))
            .route("/{id}", web::get().to(get_customer::<DB>))
            .route("/{id}", web::put().to(update_customer::<DB>)),
    );
}

#[tracing::instrument(name = "create_customer", skip(service))]
pub async fn create_customer<DB: CustomerRepository + 'static>(
    service: web::Data<CustomerService<DB>>,
    customer: web::Json<NewCustomer>,
) -> Result<HttpResponse> {
    let customer = service.create_customer(&customer).await?;
    Ok(HttpResponse::Created().json(customer))
}

#[tracing::instrument(name = "get_customer", skip(service))]
pub async fn get_customer<DB: CustomerRepository + 'static>(
    service: web::Data<CustomerService<DB>>,
    id: web::Path<i32>,
) -> Result<HttpResponse> {
    let customer = service.get_customer(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(customer))
}

#[tracing::instrument(name = "get_customers", skip(service))]
pub async fn get_customers<DB: CustomerRepository + 'static>(
    service: web::Data<CustomerService<DB>>,
) -> Result<HttpResponse> {
    let customers = service.get_customers().await?;
    Ok(HttpResponse::Ok().json(customers))
}

/// Responds with a plain text confirmation rather than the updated customer
#[tracing::instrument(name = "update_customer", skip(service))]
pub async fn update_customer<DB: CustomerRepository + 'static>(
    service: web::Data<CustomerService<DB>>,
    id: web::Path<i32>,
    update: web::Json<CustomerUpdate>,
) -> Result<HttpResponse> {
    let message = service.update_customer(id.into_inner(), &update).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(message))
}
