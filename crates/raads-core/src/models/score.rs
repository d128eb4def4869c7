use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::dimension::Dimension;

/// Result of one scoring pass over an answer sheet.
///
/// Values are always produced fresh by folding contributions with
/// [`Score::with_contribution`]; nothing updates a score in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Score {
    pub total: u16,
    pub social_relatedness: u16,
    pub circumscribed_interests: u16,
    pub language: u16,
    pub sensory_motor: u16,
}

impl Score {
    /// Highest total attainable on the 80-question scale.
    pub const MAX_TOTAL: u16 = 240;

    /// Add one question's points to the total and to its dimension.
    #[must_use]
    pub fn with_contribution(mut self, dimension: Dimension, points: u8) -> Self {
        let points = u16::from(points);
        self.total += points;
        match dimension {
            Dimension::SocialRelatedness => self.social_relatedness += points,
            Dimension::CircumscribedInterests => self.circumscribed_interests += points,
            Dimension::Language => self.language += points,
            Dimension::SensoryMotor => self.sensory_motor += points,
        }
        self
    }

    pub fn dimension(&self, dimension: Dimension) -> u16 {
        match dimension {
            Dimension::SocialRelatedness => self.social_relatedness,
            Dimension::CircumscribedInterests => self.circumscribed_interests,
            Dimension::Language => self.language,
            Dimension::SensoryMotor => self.sensory_motor,
        }
    }

    /// Dimension scores in report order.
    pub fn dimensions(&self) -> [(Dimension, u16); 4] {
        Dimension::ALL.map(|d| (d, self.dimension(d)))
    }

    /// Sum of the four dimensions, widened so that arbitrary values read
    /// off the wire cannot overflow.
    pub fn dimension_sum(&self) -> u32 {
        self.dimensions()
            .iter()
            .map(|&(_, value)| u32::from(value))
            .sum()
    }

    /// True when the total equals the sum of the four dimensions.
    pub fn is_consistent(&self) -> bool {
        u32::from(self.total) == self.dimension_sum()
    }
}
