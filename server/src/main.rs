#[macro_use]
extern crate log;

use std::{env, io};

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

mod handlers;
mod routes;
mod templates;
mod tests;
mod validate;

use crate::routes::{not_found, routes};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

    let pool = web::Data::new(db::new_pool());
    let templates = web::Data::new(templates::new_templates().map_err(|err| {
        error!("Failed to load templates - {}", err);
        io::Error::new(io::ErrorKind::Other, err.to_string())
    })?);

    info!("Starting polls server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
            .app_data(pool.clone())
            .app_data(templates.clone())
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}
