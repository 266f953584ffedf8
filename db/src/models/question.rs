use chrono::{DateTime, Duration, Utc};
use diesel::{self, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions;

/// Number of questions shown on the index page.
pub const LATEST_QUESTION_LIMIT: i64 = 5;

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[table_name = "questions"]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn create(
        conn: &PgConnection,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(questions::table)
            .values(NewQuestion {
                question_text,
                pub_date,
            })
            .get_result(conn)?;

        Ok(question)
    }

    /// Published questions, newest first, capped at `limit`.
    pub fn find_latest_published(
        conn: &PgConnection,
        now: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::{pub_date, questions};

        let results = questions
            .filter(pub_date.le(now))
            .order(pub_date.desc())
            .limit(limit)
            .load::<Question>(conn)?;

        Ok(results)
    }

    /// Looks up a question by id, treating one scheduled after `now` as missing.
    pub fn find_published_by_id(
        conn: &PgConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use crate::schema::questions::dsl::{pub_date, questions};

        let question = questions
            .find(question_id)
            .filter(pub_date.le(now))
            .first::<Question>(conn)?;

        Ok(question)
    }

    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }

    /// True when `pub_date` falls within the day leading up to `now`, inclusive.
    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }
}
