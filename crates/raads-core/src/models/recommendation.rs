use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Icon shown next to a recommendation. Serialized as the lucide icon name
/// the front end renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum IconRef {
    AlertTriangle,
    Book,
    Briefcase,
    CheckCircle,
    GraduationCap,
    Heart,
    HeartPulse,
    Home,
    Monitor,
    Stethoscope,
    Users,
}

/// A single recommendation or piece of general advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub title: String,
    pub content: String,
    pub icon: IconRef,
}

impl Recommendation {
    pub fn new(title: &str, content: &str, icon: IconRef) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            icon,
        }
    }
}
