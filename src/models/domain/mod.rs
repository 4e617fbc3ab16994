pub mod question;
pub mod topic;
pub use question::{CheckboxQuestion, McqQuestion, Question, QuestionLevel, QuestionOption, QuestionType};
pub use topic::Topic;
