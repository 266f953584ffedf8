use actix_web::{web::Data, HttpResponse};
use tera::Tera;

use db::{get_conn, PgPool};
use errors::Error;

use crate::handlers::get_latest_questions;
use crate::templates::{render, INDEX};

pub async fn index(pool: Data<PgPool>, templates: Data<Tera>) -> Result<HttpResponse, Error> {
    let connection = get_conn(&pool)?;
    let context = get_latest_questions(connection).await?;

    render(&templates, INDEX, &context)
}
