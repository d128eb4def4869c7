use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use raads_core::models::score::Score;
use raads_export::context::ReportContext;
use raads_instruments::require_instrument;
use raads_instruments::scoring::validate_score;

use crate::error::ApiError;
use crate::routes::scoring::parse_sheet;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReportRequest {
    score: Score,
    #[serde(default)]
    respondent: Option<String>,
    /// When present, the report lists each answered question.
    #[serde(default)]
    answers: Option<BTreeMap<u8, i64>>,
    #[serde(default = "default_instrument")]
    instrument_id: String,
}

fn default_instrument() -> String {
    "raads_r".to_string()
}

#[derive(Serialize)]
pub struct ReportResponse {
    markdown: String,
}

pub async fn create_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<ReportResponse>, ApiError> {
    validate_score(&request.score)?;

    let mut context = ReportContext::build(&request.score)?;
    if let Some(respondent) = request.respondent {
        context = context.with_respondent(respondent);
    }
    if let Some(raw) = request.answers {
        let instrument = require_instrument(&request.instrument_id)?;
        let sheet = parse_sheet(instrument.as_ref(), raw)?;
        context = context.with_responses(instrument.answer_details(&sheet));
    }

    let markdown = state.renderer.render(&context)?;
    Ok(Json(ReportResponse { markdown }))
}
