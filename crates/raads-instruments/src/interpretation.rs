use std::sync::LazyLock;

use raads_core::models::recommendation::{IconRef, Recommendation};
use raads_core::models::score::Score;

use crate::error::ScoringError;

/// A total-score band with an inclusive upper bound. Boundary totals belong
/// to the lower band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpretationBand {
    pub upper: u16,
    pub label: &'static str,
    pub detail: &'static str,
}

pub const INTERPRETATION_BANDS: [InterpretationBand; 8] = [
    InterpretationBand {
        upper: 25,
        label: "No Indications of Autism",
        detail: "A score of 25 indicates no signs of autism. This score suggests that there are no significant characteristics related to autism in various aspects such as social interaction, communication, and repetitive behaviors.",
    },
    InterpretationBand {
        upper: 50,
        label: "Presence of Some Traits Associated with Autism, Though It's Unlikely to Be Autism",
        detail: "A score of 50 indicates the presence of some traits associated with autism, but it is unlikely to be autism. This may reflect mild social difficulties or special interests, but not enough to warrant an autism diagnosis.",
    },
    InterpretationBand {
        upper: 65,
        label: "Base Threshold for Potential Autism Consideration",
        detail: "A score of 65 suggests that autism should be considered as a potential diagnosis. This score is at the threshold for autism consideration, indicating the need for a more in-depth assessment.",
    },
    InterpretationBand {
        upper: 90,
        label: "Enhanced Signs of Autism",
        detail: "A score of 90 indicates significant signs of autism, although such scores can also be found in non-autistic individuals. This suggests that the individual may exhibit multiple characteristics of autism and needs further professional assessment.",
    },
    InterpretationBand {
        upper: 130,
        label: "Average Score Among Individuals with Autism, Indicating a Strong Likelihood of Autism",
        detail: "A score of 130 is the average score among individuals with autism, strongly suggesting the presence of autism. This indicates that the individual has noticeable autism characteristics in social, communication, and behavioral aspects.",
    },
    InterpretationBand {
        upper: 160,
        label: "Overwhelming Evidence Pointing Towards Autism",
        detail: "A score of 160 indicates overwhelming evidence of autism. This score suggests that the individual exhibits very strong and numerous characteristics associated with autism.",
    },
    InterpretationBand {
        upper: 227,
        label: "Highest Score Recorded by Individuals with Autism in the Foundational RAADS-R Study",
        detail: "A score of 227 represents the highest score recorded by individuals with autism in the foundational RAADS-R study. This indicates a very high level of autism characteristics.",
    },
    InterpretationBand {
        upper: Score::MAX_TOTAL,
        label: "The Absolute Maximum Score Attainable on the RAADS-R Scale",
        detail: "A score of 240 is the maximum score attainable on the RAADS-R scale, indicating the presence of all measured characteristics associated with autism to the highest degree.",
    },
];

/// Find the interpretation band for a total. Totals above 240 cannot come
/// out of a scoring pass and are rejected.
pub fn interpretation_band(total: u16) -> Result<&'static InterpretationBand, ScoringError> {
    INTERPRETATION_BANDS
        .iter()
        .find(|band| total <= band.upper)
        .ok_or(ScoringError::TotalOutOfRange(total))
}

pub fn interpretation_label(total: u16) -> Result<&'static str, ScoringError> {
    interpretation_band(total).map(|band| band.label)
}

pub fn interpretation_detail(total: u16) -> Result<&'static str, ScoringError> {
    interpretation_band(total).map(|band| band.detail)
}

/// Recommendations for an inclusive total range. Kept separate from
/// [`INTERPRETATION_BANDS`]: the two tables are maintained independently.
#[derive(Debug, Clone)]
pub struct RecommendationBand {
    pub min: u16,
    pub max: u16,
    pub items: Vec<Recommendation>,
}

impl RecommendationBand {
    pub fn contains(&self, total: u16) -> bool {
        (self.min..=self.max).contains(&total)
    }
}

pub fn recommendation_bands() -> &'static [RecommendationBand] {
    static BANDS: LazyLock<Vec<RecommendationBand>> = LazyLock::new(|| {
        use IconRef::*;
        let band = |min, max, items| RecommendationBand { min, max, items };
        let rec = Recommendation::new;

        vec![
            band(0, 25, vec![
                rec("Monitoring", "Continue to observe behavior for any changes or concerns.", Monitor),
                rec("Social Engagement", "Engage in social activities to develop social skills and interests.", Users),
            ]),
            band(26, 50, vec![
                rec("Professional Consultation", "Consider consulting a psychologist or autism specialist for further evaluation and advice.", Briefcase),
                rec("Behavioral Interventions", "Social skills training or behavioral interventions can help improve social interaction and communication abilities.", CheckCircle),
                rec("Support Groups", "Join support groups or online communities for additional resources and shared experiences.", Users),
            ]),
            band(51, 65, vec![
                rec("Comprehensive Evaluation", "Arrange for a comprehensive autism evaluation, including interviews and observations by a psychologist, psychiatrist, or autism specialist.", Book),
                rec("Early Intervention", "If diagnosed, begin developing a personalized intervention plan, including social skills training, speech therapy, and behavioral therapy to address specific challenges.", AlertTriangle),
                rec("Educational Support", "Engage with educational support services to ensure appropriate accommodations are made in academic settings.", Book),
            ]),
            band(66, 90, vec![
                rec("Immediate Assessment", "Seek a comprehensive autism diagnosis assessment to determine the specific situation.", AlertTriangle),
                rec("Intensive Intervention", "If diagnosed, participate in early intervention programs, including applied behavior analysis (ABA), to improve cognitive and behavioral skills.", CheckCircle),
                rec("Multidisciplinary Approach", "Include occupational therapy, speech therapy, and possibly physical therapy to address various developmental needs.", Heart),
            ]),
            band(91, 130, vec![
                rec("Diagnosis Confirmation", "Confirm the diagnosis and collaborate with autism specialists to develop a comprehensive intervention plan.", Briefcase),
                rec("Specialized Programs", "Engage in specialized programs and therapies designed for individuals with autism to support social, communication, and behavioral development.", Book),
                rec("Educational and Vocational Planning", "Plan for long-term educational and vocational support to ensure successful transitions through various life stages.", Book),
            ]),
            band(131, 160, vec![
                rec("Thorough Evaluation", "Confirm the diagnosis with a thorough evaluation by an autism specialist.", Book),
                rec("Robust Support Plan", "Implement a robust and multi-faceted intervention plan, including intensive behavioral therapy, social skills training, and family support programs.", CheckCircle),
                rec("Comprehensive Care", "Ensure access to comprehensive care, including medical, psychological, and educational support services.", Heart),
            ]),
            band(161, 227, vec![
                rec("Accurate Diagnosis", "Ensure an accurate and comprehensive diagnosis to confirm the extent of autism.", Briefcase),
                rec("Individualized Support", "Develop an intensive, individualized support plan that includes specialized education, therapies, and continuous monitoring of progress.", Heart),
                rec("Lifelong Assistance", "Plan for lifelong assistance and support, including transition planning for adulthood and independent living if possible.", Users),
            ]),
            band(228, 240, vec![
                rec("Comprehensive Evaluations", "Confirm the diagnosis with thorough professional evaluations, including multidisciplinary assessments.", Book),
                rec("Extensive Interventions", "Implement an extensive and tailored intervention strategy, involving multiple therapeutic approaches and continuous evaluation to address all aspects of autism.", CheckCircle),
                rec("Community and Family Support", "Engage community and family support systems to provide a network of care and assistance.", Users),
            ]),
        ]
    });
    &BANDS
}

/// Recommendations for a total. Empty when no band matches, which only
/// happens above 240.
pub fn recommendations(total: u16) -> &'static [Recommendation] {
    recommendation_bands()
        .iter()
        .find(|band| band.contains(total))
        .map(|band| band.items.as_slice())
        .unwrap_or(&[])
}

/// Advice shown to every respondent regardless of score.
pub fn general_advice() -> &'static [Recommendation] {
    static ADVICE: LazyLock<Vec<Recommendation>> = LazyLock::new(|| {
        vec![
            Recommendation::new(
                "Mental Health Support",
                "Many individuals with autism or autism-like traits benefit from mental health support, including counseling and cognitive-behavioral therapy (CBT).",
                IconRef::HeartPulse,
            ),
            Recommendation::new(
                "Educational Accommodations",
                "Ensure that educational settings provide necessary accommodations, such as individualized education plans (IEPs) and specialized support.",
                IconRef::GraduationCap,
            ),
            Recommendation::new(
                "Social Skills Training",
                "Programs focusing on social skills can significantly improve interactions and quality of life.",
                IconRef::Users,
            ),
            Recommendation::new(
                "Regular Medical Checkups",
                "Regular medical and developmental checkups can help address any co-occurring conditions or concerns early on.",
                IconRef::Stethoscope,
            ),
            Recommendation::new(
                "Family Education",
                "Educate family members about autism to foster a supportive home environment and reduce misunderstandings.",
                IconRef::Home,
            ),
        ]
    });
    &ADVICE
}
