use actix_web::web::block;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{
    models::{Choice, Question},
    Connection,
};
use errors::Error;

/// Shared by the detail and results pages.
#[derive(Debug, Deserialize, Serialize)]
pub struct QuestionContext {
    pub question: Question,
    pub choices: Vec<Choice>,
    pub error_message: Option<String>,
}

pub async fn get_question_details(
    connection: Connection,
    question_id: i32,
) -> Result<QuestionContext, Error> {
    let (question, choices) = block(move || -> Result<(Question, Vec<Choice>), Error> {
        let question = Question::find_published_by_id(&connection, question_id, Utc::now())?;
        let choices = Choice::find_by_question(&connection, &question)?;
        Ok((question, choices))
    })
    .await??;

    Ok(QuestionContext {
        question,
        choices,
        error_message: None,
    })
}
