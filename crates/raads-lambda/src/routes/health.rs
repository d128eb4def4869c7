use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthBody {
    status: &'static str,
    service: String,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        service: state.config.service_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
