use crate::Instrument;
use crate::questions::{Question, question_bank};

/// RAADS-R: Ritvo Autism Asperger Diagnostic Scale, Revised.
/// 80 self-report statements, each scored 0–3. Total 0–240.
pub struct RaadsR;

impl Instrument for RaadsR {
    fn id(&self) -> &str {
        "raads_r"
    }

    fn name(&self) -> &str {
        "RAADS-R"
    }

    fn questions(&self) -> &[Question] {
        question_bank()
    }
}
