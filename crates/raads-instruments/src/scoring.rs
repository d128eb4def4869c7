use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use raads_core::models::answer::AnswerSheet;
use raads_core::models::score::Score;

use crate::error::ScoringError;
use crate::questions::{Question, dimension_max};

/// Points per choice index where endorsing the statement indicates traits.
pub const SYMPTOM: [u8; 4] = [3, 2, 1, 0];

/// Points per choice index for reverse-scored statements.
pub const NON_SYMPTOM: [u8; 4] = [0, 1, 2, 3];

/// Score an answer sheet against a question bank.
///
/// Questions without an answer contribute nothing, so this is safe to call
/// after every answer as well as once on a complete sheet. Each call starts
/// from zero; there is no state carried between calls. Answers for ids not
/// in `questions` are ignored here and reported by validation instead.
pub fn score(answers: &AnswerSheet, questions: &[Question], reverse_scored: &BTreeSet<u8>) -> Score {
    let score = questions
        .iter()
        .filter_map(|q| answers.get(q.id).map(|choice| (q, choice)))
        .fold(Score::default(), |acc, (q, choice)| {
            let table = points_table(q.id, reverse_scored);
            acc.with_contribution(q.dimension, table[choice.index()])
        });

    tracing::debug!(
        answered = answers.len(),
        questions = questions.len(),
        total = score.total,
        "scored answer sheet"
    );
    score
}

/// Points a single question contributes for a choice index.
pub fn contribution(question_id: u8, choice_index: usize, reverse_scored: &BTreeSet<u8>) -> Option<u8> {
    points_table(question_id, reverse_scored)
        .get(choice_index)
        .copied()
}

fn points_table(question_id: u8, reverse_scored: &BTreeSet<u8>) -> &'static [u8; 4] {
    if reverse_scored.contains(&question_id) {
        &NON_SYMPTOM
    } else {
        &SYMPTOM
    }
}

/// Check that a score could have come out of a scoring pass over the
/// canonical bank: total within the scale, each dimension within its
/// maximum, and the total equal to the dimension sum.
pub fn validate_score(score: &Score) -> Result<(), ScoringError> {
    if score.total > Score::MAX_TOTAL {
        return Err(ScoringError::TotalOutOfRange(score.total));
    }
    for (dimension, value) in score.dimensions() {
        let max = dimension_max(dimension);
        if value > max {
            return Err(ScoringError::DimensionOutOfRange {
                dimension,
                value,
                max,
            });
        }
    }
    if !score.is_consistent() {
        return Err(ScoringError::Inconsistent {
            total: score.total,
            sum: score.dimension_sum(),
        });
    }
    Ok(())
}

/// An answer that does not fit the instrument it was submitted against.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: u8,
    pub message: String,
}
