use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::AnswerSheet;
use super::score::Score;

/// A completed, scored submission. Persisting it is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    pub instrument_id: String,
    pub respondent: Option<String>,
    #[ts(type = "Record<number, number>")]
    pub answers: AnswerSheet,
    pub score: Score,
    pub completed_at: jiff::Timestamp,
}

impl Assessment {
    pub fn new(
        instrument_id: &str,
        respondent: Option<String>,
        answers: AnswerSheet,
        score: Score,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            instrument_id: instrument_id.to_string(),
            respondent,
            answers,
            score,
            completed_at: jiff::Timestamp::now(),
        }
    }
}
