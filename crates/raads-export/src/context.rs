use serde::Serialize;

use raads_core::models::answer::AnswerDetail;
use raads_core::models::recommendation::Recommendation;
use raads_core::models::score::Score;
use raads_instruments::interpretation::{
    general_advice, interpretation_band, recommendations,
};
use raads_instruments::questions::dimension_max;

use crate::error::ExportError;

/// One row of the dimension breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionRow {
    pub name: String,
    pub short_name: String,
    pub score: u16,
    pub max: u16,
    /// Share of the dimension maximum, rounded to the nearest percent.
    pub percent: u16,
}

/// Everything a report template can reference.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub respondent: Option<String>,
    pub total: u16,
    pub max_total: u16,
    pub label: String,
    pub detail: String,
    pub dimensions: Vec<DimensionRow>,
    pub recommendations: Vec<Recommendation>,
    pub general_advice: Vec<Recommendation>,
    pub responses: Vec<AnswerDetail>,
}

impl ReportContext {
    pub fn build(score: &Score) -> Result<Self, ExportError> {
        let band = interpretation_band(score.total)?;

        let dimensions = score
            .dimensions()
            .into_iter()
            .map(|(dimension, value)| {
                let max = dimension_max(dimension);
                DimensionRow {
                    name: dimension.name().to_string(),
                    short_name: dimension.short_name().to_string(),
                    score: value,
                    max,
                    percent: percent_of(value, max),
                }
            })
            .collect();

        Ok(Self {
            respondent: None,
            total: score.total,
            max_total: Score::MAX_TOTAL,
            label: band.label.to_string(),
            detail: band.detail.to_string(),
            dimensions,
            recommendations: recommendations(score.total).to_vec(),
            general_advice: general_advice().to_vec(),
            responses: Vec::new(),
        })
    }

    pub fn with_respondent(mut self, respondent: impl Into<String>) -> Self {
        self.respondent = Some(respondent.into());
        self
    }

    pub fn with_responses(mut self, responses: Vec<AnswerDetail>) -> Self {
        self.responses = responses;
        self
    }
}

fn percent_of(value: u16, max: u16) -> u16 {
    if max == 0 {
        return 0;
    }
    let value = u32::from(value);
    let max = u32::from(max);
    ((value * 100 + max / 2) / max) as u16
}
