use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use raads_core::models::answer::Choice;
use raads_instruments::questions::Question;
use raads_instruments::{all_instruments, require_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
    question_count: usize,
}

#[derive(Serialize)]
pub struct OptionLabel {
    index: u8,
    label: &'static str,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    options: Vec<OptionLabel>,
    questions: Vec<Question>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
            question_count: i.questions().len(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = require_instrument(&id)?;

    let options = Choice::ALL
        .into_iter()
        .map(|choice| OptionLabel {
            index: choice.into(),
            label: choice.label(),
        })
        .collect();

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        options,
        questions: instrument.questions().to_vec(),
    }))
}
