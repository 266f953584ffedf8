use actix_web::{
    http::header,
    web::{block, Data, Form, Path},
    HttpResponse,
};
use serde::{Deserialize, Serialize};
use tera::Tera;
use validator::Validate;

use db::{get_conn, models::Choice, PgPool};
use errors::Error;

use crate::handlers::{get_question_details, QuestionContext};
use crate::templates::{render, DETAIL};
use crate::validate::validate;

const NO_CHOICE_SELECTED: &str = "You didn't select a choice.";

/// `choice` stays a string so a malformed id is rejected after the question lookup.
#[derive(Deserialize, Serialize, Validate)]
pub struct VoteForm {
    #[validate(required(message = "You didn't select a choice."))]
    pub choice: Option<String>,
}

impl VoteForm {
    fn choice_id(&self) -> Option<i32> {
        self.choice
            .as_ref()
            .and_then(|choice| choice.trim().parse().ok())
    }
}

fn redisplay(
    templates: &Tera,
    mut context: QuestionContext,
    message: String,
) -> Result<HttpResponse, Error> {
    context.error_message = Some(message);
    render(templates, DETAIL, &context)
}

pub async fn vote(
    question_id: Path<i32>,
    pool: Data<PgPool>,
    templates: Data<Tera>,
    params: Form<VoteForm>,
) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();
    let context = get_question_details(get_conn(&pool)?, question_id).await?;

    if let Err(err) = validate(&*params) {
        return match err {
            Error::ValidationError(messages) => redisplay(&templates, context, messages.join(" ")),
            err => Err(err),
        };
    }
    let choice_id = match params.choice_id() {
        Some(choice_id) => choice_id,
        None => return redisplay(&templates, context, NO_CHOICE_SELECTED.to_string()),
    };

    let connection = get_conn(&pool)?;
    let voted = block(move || Choice::vote(&connection, question_id, choice_id)).await?;

    match voted {
        Ok(_) => Ok(HttpResponse::Found()
            .insert_header((header::LOCATION, format!("/polls/{}/results/", question_id)))
            .finish()),
        Err(Error::NotFound(_)) => redisplay(&templates, context, NO_CHOICE_SELECTED.to_string()),
        Err(err) => Err(err),
    }
}
