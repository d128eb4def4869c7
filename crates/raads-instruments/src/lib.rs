//! raads-instruments
//!
//! RAADS-R instrument definitions and the scoring engine. Pure data and pure
//! functions: the question bank, dimension membership, reverse-scored
//! statements, the scoring pass, and the interpretation and recommendation
//! tables that turn a total into report text.

pub mod error;
pub mod instruments;
pub mod interpretation;
pub mod questions;
pub mod scoring;

use std::collections::BTreeSet;

use raads_core::models::answer::{AnswerDetail, AnswerSheet};
use raads_core::models::score::Score;

use error::ScoringError;
use questions::Question;
use scoring::ValidationError;

/// Trait implemented by each question bank that follows the RAADS-R rules.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "raads_r").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "RAADS-R").
    fn name(&self) -> &str;

    /// Questions in presentation order.
    fn questions(&self) -> &[Question];

    /// Ids scored with the reversed table.
    fn reverse_scored(&self) -> &BTreeSet<u8> {
        questions::reverse_scored_ids()
    }

    fn question_ids(&self) -> Vec<u8> {
        self.questions().iter().map(|q| q.id).collect()
    }

    /// Report answers that reference questions outside this instrument.
    fn validate_answers(&self, answers: &AnswerSheet) -> Vec<ValidationError> {
        answers
            .iter()
            .filter(|a| !self.questions().iter().any(|q| q.id == a.question_id))
            .map(|a| ValidationError {
                question_id: a.question_id,
                message: format!(
                    "{}: question {} is not part of this instrument",
                    self.name(),
                    a.question_id
                ),
            })
            .collect()
    }

    /// Score a possibly partial sheet.
    fn score(&self, answers: &AnswerSheet) -> Score {
        scoring::score(answers, self.questions(), self.reverse_scored())
    }

    /// Score a final submission: every answer must belong to this
    /// instrument and every question must be answered.
    fn score_submission(&self, answers: &AnswerSheet) -> Result<Score, ScoringError> {
        if let Some(err) = self.validate_answers(answers).into_iter().next() {
            return Err(err.into());
        }
        let missing = answers.missing(self.question_ids());
        if !missing.is_empty() {
            return Err(ScoringError::Incomplete { missing });
        }
        Ok(self.score(answers))
    }

    /// Pair each answered question with its text and the chosen option.
    fn answer_details(&self, answers: &AnswerSheet) -> Vec<AnswerDetail> {
        self.questions()
            .iter()
            .filter_map(|q| {
                answers.get(q.id).map(|choice| AnswerDetail {
                    id: q.id,
                    text: q.text.clone(),
                    answer: choice.label().to_string(),
                })
            })
            .collect()
    }

    /// Format a score as structured text for a downstream analysis prompt.
    fn to_structured_input(&self, score: &Score, details: &[AnswerDetail]) -> String {
        let mut output = format!("## {}\n\n", self.name());
        output.push_str(&format!(
            "OVERALL SCORE: {}/{}\n\nDIMENSION SCORES:\n",
            score.total,
            Score::MAX_TOTAL
        ));
        for (dimension, value) in score.dimensions() {
            output.push_str(&format!("{dimension}: {value}\n"));
        }
        if !details.is_empty() {
            output.push_str("\nDETAILED RESPONSES:\n");
            for detail in details {
                output.push_str(&format!(
                    "Q{}. \"{}\"\n    Response: {}\n",
                    detail.id, detail.text, detail.answer
                ));
            }
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::raads_r::RaadsR),
        Box::new(instruments::raads_r_preview::RaadsRPreview),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Look up an instrument by ID, failing with [`ScoringError::UnknownInstrument`].
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, ScoringError> {
    get_instrument(id).ok_or_else(|| ScoringError::UnknownInstrument(id.to_string()))
}
