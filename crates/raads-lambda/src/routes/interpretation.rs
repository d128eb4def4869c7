use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use raads_core::models::recommendation::Recommendation;
use raads_instruments::interpretation::{interpretation_band, recommendations};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InterpretationResponse {
    total: u16,
    label: &'static str,
    detail: &'static str,
    recommendations: Vec<Recommendation>,
}

pub async fn get_interpretation(
    Path(total): Path<u16>,
) -> Result<Json<InterpretationResponse>, ApiError> {
    let band = interpretation_band(total)?;
    Ok(Json(InterpretationResponse {
        total,
        label: band.label,
        detail: band.detail,
        recommendations: recommendations(total).to_vec(),
    }))
}
