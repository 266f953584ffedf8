#[macro_use]
extern crate log;

use chrono::{Duration, Utc};
use dotenv::dotenv;

use db::{
    get_conn,
    models::{Choice, Question},
    new_pool,
};
use errors::Error;

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::init();

    let pool = new_pool();
    let conn = get_conn(&pool)?;

    for (days_ago, question_text, choices) in &[
        (0, "What's up?", vec!["Not much", "The sky", "Just hacking again"]),
        (2, "Which protoss unit is the best?", vec!["Stalker", "Zealot", "Carrier"]),
        (7, "Favourite map?", vec!["Fighting Spirit", "Circuit Breaker"]),
    ] {
        let question = Question::create(
            &conn,
            question_text.to_string(),
            Utc::now() - Duration::days(*days_ago),
        )?;

        for choice_text in choices {
            Choice::create(&conn, question.id, choice_text.to_string())?;
        }

        info!("Seeded question {} - {}", question.id, question.question_text);
    }

    Ok(())
}
