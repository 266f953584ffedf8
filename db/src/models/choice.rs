use diesel::{self, BelongingToDsl, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Question;
use crate::schema::choices;

#[derive(
    Associations, Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize,
)]
#[table_name = "choices"]
#[belongs_to(Question)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Insertable)]
#[table_name = "choices"]
pub struct NewChoice {
    pub question_id: i32,
    pub choice_text: String,
}

impl Choice {
    pub fn create(
        conn: &PgConnection,
        question_id: i32,
        choice_text: String,
    ) -> Result<Choice, Error> {
        let choice = diesel::insert_into(choices::table)
            .values(NewChoice {
                question_id,
                choice_text,
            })
            .get_result(conn)?;

        Ok(choice)
    }

    pub fn find_by_question(conn: &PgConnection, question: &Question) -> Result<Vec<Choice>, Error> {
        use crate::schema::choices::dsl::id;

        let results = Choice::belonging_to(question)
            .order(id.asc())
            .load::<Choice>(conn)?;

        Ok(results)
    }

    /// Adds one vote to `choice_id`, provided it belongs to `question_id`.
    /// The increment happens inside the UPDATE so concurrent votes are not lost.
    pub fn vote(conn: &PgConnection, question_id: i32, choice_id: i32) -> Result<Choice, Error> {
        use crate::schema::choices::dsl::{
            choices as choices_table, id, question_id as question_id_field, votes,
        };

        let choice = diesel::update(
            choices_table
                .filter(id.eq(choice_id))
                .filter(question_id_field.eq(question_id)),
        )
        .set(votes.eq(votes + 1))
        .get_result::<Choice>(conn)?;

        debug!("Recorded vote for choice {} of question {}", choice.id, question_id);

        Ok(choice)
    }
}
