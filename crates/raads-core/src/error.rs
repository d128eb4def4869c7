use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid choice index {0}: expected a value in 0..=3")]
    InvalidChoice(i64),

    #[error("duplicate answer for question {0}")]
    DuplicateAnswer(u8),

    #[error("presentation index {index} is outside the question bank ({len} questions)")]
    PresentationIndex { index: usize, len: usize },
}
