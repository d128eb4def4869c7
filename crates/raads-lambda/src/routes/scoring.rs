use std::collections::BTreeMap;

use axum::Json;
use axum::extract::Path;
use serde::{Deserialize, Serialize};

use raads_core::models::answer::AnswerSheet;
use raads_core::models::assessment::Assessment;
use raads_core::models::recommendation::Recommendation;
use raads_core::models::score::Score;
use raads_instruments::interpretation::{interpretation_band, recommendations};
use raads_instruments::{Instrument, require_instrument};

use crate::error::ApiError;

/// Answers as submitted by the quiz: question id to raw choice index.
/// Indices are validated when converted into an [`AnswerSheet`].
#[derive(Deserialize)]
pub struct AnswersRequest {
    answers: BTreeMap<u8, i64>,
    #[serde(default)]
    respondent: Option<String>,
    #[serde(default)]
    include_responses: bool,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    instrument_id: String,
    score: Score,
    label: &'static str,
    detail: &'static str,
    recommendations: Vec<Recommendation>,
    complete: bool,
    missing: Vec<u8>,
}

#[derive(Serialize)]
pub struct StructuredInputResponse {
    text: String,
}

pub(crate) fn parse_sheet(instrument: &dyn Instrument, raw: BTreeMap<u8, i64>) -> Result<AnswerSheet, ApiError> {
    let sheet = AnswerSheet::from_raw(raw)?;
    if let Some(err) = instrument.validate_answers(&sheet).into_iter().next() {
        return Err(ApiError::BadRequest(err.message));
    }
    Ok(sheet)
}

/// Score a possibly partial sheet. Called by the quiz after every answer.
pub async fn score_answers(
    Path(id): Path<String>,
    Json(request): Json<AnswersRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let instrument = require_instrument(&id)?;
    let sheet = parse_sheet(instrument.as_ref(), request.answers)?;

    let score = instrument.score(&sheet);
    let band = interpretation_band(score.total)?;
    let missing = sheet.missing(instrument.question_ids());

    Ok(Json(ScoreResponse {
        instrument_id: instrument.id().to_string(),
        score,
        label: band.label,
        detail: band.detail,
        recommendations: recommendations(score.total).to_vec(),
        complete: missing.is_empty(),
        missing,
    }))
}

/// Final submission: the sheet must be complete.
pub async fn submit_assessment(
    Path(id): Path<String>,
    Json(request): Json<AnswersRequest>,
) -> Result<Json<Assessment>, ApiError> {
    let instrument = require_instrument(&id)?;
    let sheet = parse_sheet(instrument.as_ref(), request.answers)?;
    let score = instrument.score_submission(&sheet)?;

    tracing::info!(
        instrument = instrument.id(),
        total = score.total,
        "assessment submitted"
    );

    Ok(Json(Assessment::new(
        instrument.id(),
        request.respondent,
        sheet,
        score,
    )))
}

/// Plain-text summary of a scored sheet for a downstream analysis prompt.
pub async fn structured_input(
    Path(id): Path<String>,
    Json(request): Json<AnswersRequest>,
) -> Result<Json<StructuredInputResponse>, ApiError> {
    let instrument = require_instrument(&id)?;
    let sheet = parse_sheet(instrument.as_ref(), request.answers)?;
    let score = instrument.score(&sheet);

    let details = if request.include_responses {
        instrument.answer_details(&sheet)
    } else {
        Vec::new()
    };

    Ok(Json(StructuredInputResponse {
        text: instrument.to_structured_input(&score, &details),
    }))
}
