use thiserror::Error;

use raads_core::error::CoreError;
use raads_core::models::dimension::Dimension;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("total score {0} is outside the scale range 0..=240")]
    TotalOutOfRange(u16),

    #[error("{dimension} score {value} exceeds the dimension maximum {max}")]
    DimensionOutOfRange {
        dimension: Dimension,
        value: u16,
        max: u16,
    },

    #[error("total {total} does not equal the sum of dimension scores ({sum})")]
    Inconsistent { total: u16, sum: u32 },

    #[error("invalid answers: {0}")]
    Answers(#[from] CoreError),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("answer sheet incomplete: {} unanswered question(s)", missing.len())]
    Incomplete { missing: Vec<u8> },
}
