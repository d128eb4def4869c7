use std::sync::LazyLock;

use crate::Instrument;
use crate::questions::{Question, question_bank};

const PREVIEW_IDS: [u8; 2] = [1, 2];

/// Two-statement preview of the RAADS-R. Same scoring rules on a reduced
/// question set, used to demo the quiz flow.
pub struct RaadsRPreview;

impl Instrument for RaadsRPreview {
    fn id(&self) -> &str {
        "raads_r_preview"
    }

    fn name(&self) -> &str {
        "RAADS-R Preview"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            question_bank()
                .iter()
                .filter(|q| PREVIEW_IDS.contains(&q.id))
                .cloned()
                .collect()
        });
        &QUESTIONS
    }
}
