use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the four RAADS-R sub-scales. Every question belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Dimension {
    SocialRelatedness,
    CircumscribedInterests,
    Language,
    SensoryMotor,
}

impl Dimension {
    /// Report order.
    pub const ALL: [Dimension; 4] = [
        Dimension::SocialRelatedness,
        Dimension::CircumscribedInterests,
        Dimension::Language,
        Dimension::SensoryMotor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dimension::SocialRelatedness => "Social Relatedness",
            Dimension::CircumscribedInterests => "Circumscribed Interests",
            Dimension::Language => "Language",
            Dimension::SensoryMotor => "Sensory-Motor",
        }
    }

    /// Axis label used by charts.
    pub fn short_name(self) -> &'static str {
        match self {
            Dimension::SocialRelatedness => "Social",
            Dimension::CircumscribedInterests => "Interests",
            Dimension::Language => "Language",
            Dimension::SensoryMotor => "Sensory",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
