use actix_web::web::block;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{
    models::{Question, LATEST_QUESTION_LIMIT},
    Connection,
};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct IndexContext {
    pub latest_question_list: Vec<Question>,
}

pub async fn get_latest_questions(connection: Connection) -> Result<IndexContext, Error> {
    let latest_question_list = block(move || {
        Question::find_latest_published(&connection, Utc::now(), LATEST_QUESTION_LIMIT)
    })
    .await??;

    Ok(IndexContext {
        latest_question_list,
    })
}
