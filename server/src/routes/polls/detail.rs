use actix_web::{
    web::{Data, Path},
    HttpResponse,
};
use tera::Tera;

use db::{get_conn, PgPool};
use errors::Error;

use crate::handlers::get_question_details;
use crate::templates::{render, DETAIL};

pub async fn detail(
    question_id: Path<i32>,
    pool: Data<PgPool>,
    templates: Data<Tera>,
) -> Result<HttpResponse, Error> {
    let connection = get_conn(&pool)?;
    let context = get_question_details(connection, question_id.into_inner()).await?;

    render(&templates, DETAIL, &context)
}
