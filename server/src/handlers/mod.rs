mod get_latest_questions;
mod get_question_details;

pub use self::get_latest_questions::*;
pub use self::get_question_details::*;
