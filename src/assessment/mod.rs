pub mod questions;
pub mod responses;

pub use questions::{find_question, questions, Question, QuestionOption};
pub use responses::{parse_payload, PayloadFormat, ResponseSet};
