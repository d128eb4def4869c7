use std::collections::BTreeSet;

use raads_core::models::answer::{AnswerSheet, Choice};
use raads_core::models::dimension::Dimension;
use raads_instruments::questions::{
    dimension_max, dimension_members, dimension_of, question_bank, reverse_scored_ids,
    REVERSE_SCORED_IDS,
};
use raads_core::models::score::Score;
use raads_instruments::error::ScoringError;
use raads_instruments::scoring::{contribution, score, validate_score, NON_SYMPTOM, SYMPTOM};

/// Every question answered with `pick(is_reverse_scored)`.
fn full_sheet(pick: impl Fn(bool) -> Choice) -> AnswerSheet {
    question_bank()
        .iter()
        .map(|q| raads_core::models::answer::Answer {
            question_id: q.id,
            choice: pick(q.is_reverse_scored),
        })
        .collect()
}

fn score_bank(sheet: &AnswerSheet) -> raads_core::models::score::Score {
    score(sheet, question_bank(), reverse_scored_ids())
}

#[test]
fn bank_has_eighty_questions_in_id_order() {
    let ids: Vec<u8> = question_bank().iter().map(|q| q.id).collect();
    assert_eq!(ids, (1..=80).collect::<Vec<u8>>());
    assert_eq!(question_bank()[0].text, "I am a sympathetic person.");
}

#[test]
fn dimension_lists_partition_all_ids() {
    let mut seen = BTreeSet::new();
    for dimension in Dimension::ALL {
        for &id in dimension_members(dimension) {
            assert!(seen.insert(id), "question {id} listed in more than one dimension");
        }
    }
    assert_eq!(seen, (1..=80).collect::<BTreeSet<u8>>());

    assert_eq!(dimension_members(Dimension::SocialRelatedness).len(), 39);
    assert_eq!(dimension_members(Dimension::CircumscribedInterests).len(), 14);
    assert_eq!(dimension_members(Dimension::Language).len(), 7);
    assert_eq!(dimension_members(Dimension::SensoryMotor).len(), 20);
}

#[test]
fn dimension_lookup_matches_source_lists() {
    assert_eq!(dimension_of(1), Some(Dimension::SocialRelatedness));
    assert_eq!(dimension_of(9), Some(Dimension::CircumscribedInterests));
    assert_eq!(dimension_of(15), Some(Dimension::Language));
    assert_eq!(dimension_of(33), Some(Dimension::SensoryMotor));
    assert_eq!(dimension_of(0), None);
    assert_eq!(dimension_of(81), None);
}

#[test]
fn dimension_maxima_sum_to_scale_maximum() {
    let maxima: Vec<u16> = Dimension::ALL.iter().map(|&d| dimension_max(d)).collect();
    assert_eq!(maxima, vec![117, 42, 21, 60]);
    assert_eq!(maxima.iter().sum::<u16>(), 240);
}

#[test]
fn reverse_scored_flags_match_fixed_set() {
    let flagged: Vec<u8> = question_bank()
        .iter()
        .filter(|q| q.is_reverse_scored)
        .map(|q| q.id)
        .collect();
    assert_eq!(flagged, REVERSE_SCORED_IDS.to_vec());
}

#[test]
fn maximum_sheet_scores_240() {
    let sheet = full_sheet(|reverse| {
        if reverse {
            Choice::NeverTrue
        } else {
            Choice::TrueNowAndWhenYoung
        }
    });
    let result = score_bank(&sheet);
    assert_eq!(result.total, 240);
    assert_eq!(result.social_relatedness, 117);
    assert_eq!(result.circumscribed_interests, 42);
    assert_eq!(result.language, 21);
    assert_eq!(result.sensory_motor, 60);
    assert!(result.is_consistent());
}

#[test]
fn minimum_sheet_scores_zero() {
    let sheet = full_sheet(|reverse| {
        if reverse {
            Choice::TrueNowAndWhenYoung
        } else {
            Choice::NeverTrue
        }
    });
    let result = score_bank(&sheet);
    assert_eq!(result.total, 0);
    assert_eq!(result.dimension_sum(), 0);
}

#[test]
fn total_equals_dimension_sum_for_every_uniform_sheet() {
    for choice in Choice::ALL {
        let result = score_bank(&full_sheet(|_| choice));
        assert!(result.is_consistent(), "inconsistent for {choice:?}: {result:?}");
        assert!(result.total <= 240);
    }
}

#[test]
fn uniform_sheets_reflect_reverse_scoring() {
    // 64 symptom questions at 3 points plus 16 reversed at 0.
    let all_first = score_bank(&full_sheet(|_| Choice::TrueNowAndWhenYoung));
    assert_eq!(all_first.total, 64 * 3);

    let all_last = score_bank(&full_sheet(|_| Choice::NeverTrue));
    assert_eq!(all_last.total, 16 * 3);
}

#[test]
fn mixed_sheet_keeps_sum_invariant() {
    let sheet: AnswerSheet = question_bank()
        .iter()
        .map(|q| raads_core::models::answer::Answer {
            question_id: q.id,
            choice: Choice::ALL[(q.id as usize * 7) % 4],
        })
        .collect();
    let result = score_bank(&sheet);
    assert!(result.is_consistent());
    assert!(result.total <= 240);
}

#[test]
fn reverse_scoring_for_questions_one_and_two() {
    let mut sheet = AnswerSheet::new();
    sheet.insert(1, Choice::TrueNowAndWhenYoung);
    assert_eq!(score_bank(&sheet).total, 0);

    let mut sheet = AnswerSheet::new();
    sheet.insert(2, Choice::TrueNowAndWhenYoung);
    let result = score_bank(&sheet);
    assert_eq!(result.total, 3);
    assert_eq!(result.language, 3);
}

#[test]
fn unanswered_questions_contribute_nothing() {
    let empty = score_bank(&AnswerSheet::new());
    assert_eq!(empty.total, 0);

    let mut sheet = AnswerSheet::new();
    sheet.insert(10, Choice::TrueNowOnly);
    sheet.insert(11, Choice::TrueNowOnly);
    let result = score_bank(&sheet);
    // 10 is sensory-motor symptom (2), 11 is social reversed (1).
    assert_eq!(result.total, 3);
    assert_eq!(result.sensory_motor, 2);
    assert_eq!(result.social_relatedness, 1);
}

#[test]
fn incremental_scores_grow_with_answers() {
    let mut sheet = AnswerSheet::new();
    let mut previous = 0;
    for q in question_bank() {
        let choice = if q.is_reverse_scored {
            Choice::NeverTrue
        } else {
            Choice::TrueNowAndWhenYoung
        };
        sheet.insert(q.id, choice);
        let current = score_bank(&sheet).total;
        assert_eq!(current, previous + 3);
        previous = current;
    }
    assert_eq!(previous, 240);
}

#[test]
fn answers_outside_the_bank_are_ignored() {
    let mut sheet = AnswerSheet::new();
    sheet.insert(200, Choice::TrueNowAndWhenYoung);
    assert_eq!(score_bank(&sheet).total, 0);
}

#[test]
fn scoring_is_idempotent() {
    let sheet = full_sheet(|reverse| if reverse { Choice::TrueNowOnly } else { Choice::TrueOnlyWhenYounger });
    assert_eq!(score_bank(&sheet), score_bank(&sheet));
}

#[test]
fn score_tables_are_mirror_images() {
    assert_eq!(SYMPTOM, [3, 2, 1, 0]);
    assert_eq!(NON_SYMPTOM, [0, 1, 2, 3]);
    assert_eq!(contribution(1, 0, reverse_scored_ids()), Some(0));
    assert_eq!(contribution(2, 0, reverse_scored_ids()), Some(3));
    assert_eq!(contribution(2, 4, reverse_scored_ids()), None);
}

#[test]
fn contribution_matches_single_answer_score() {
    let reverse = reverse_scored_ids();
    for q in question_bank() {
        for choice in Choice::ALL {
            let index = choice.index();
            let sheet: AnswerSheet = [raads_core::models::answer::Answer {
                question_id: q.id,
                choice,
            }]
            .into_iter()
            .collect();
            let scored = score(&sheet, question_bank(), reverse);
            let expected = contribution(q.id, index, reverse).unwrap();
            assert_eq!(scored.total, u16::from(expected), "question {} choice {index}", q.id);
        }
    }
}

#[test]
fn validate_score_accepts_scored_sheets() {
    let max = score(
        &full_sheet(|rev| if rev { Choice::NeverTrue } else { Choice::TrueNowAndWhenYoung }),
        question_bank(),
        reverse_scored_ids(),
    );
    assert_eq!(max.total, Score::MAX_TOTAL);
    assert!(validate_score(&max).is_ok());
    assert!(validate_score(&Score::default()).is_ok());
}

#[test]
fn validate_score_rejects_dimension_above_maximum() {
    let over = Score {
        total: 200,
        social_relatedness: 200,
        ..Score::default()
    };
    match validate_score(&over) {
        Err(ScoringError::DimensionOutOfRange { dimension, value, max }) => {
            assert_eq!(dimension, Dimension::SocialRelatedness);
            assert_eq!(value, 200);
            assert_eq!(max, dimension_max(Dimension::SocialRelatedness));
        }
        other => panic!("expected DimensionOutOfRange, got {other:?}"),
    }
}

#[test]
fn validate_score_rejects_total_above_scale() {
    let over = Score {
        total: 241,
        ..Score::default()
    };
    assert!(matches!(validate_score(&over), Err(ScoringError::TotalOutOfRange(241))));
}

#[test]
fn validate_score_rejects_inconsistent_total() {
    let wrapped = Score {
        total: 0,
        social_relatedness: u16::MAX,
        circumscribed_interests: 1,
        ..Score::default()
    };
    assert!(matches!(
        validate_score(&wrapped),
        Err(ScoringError::DimensionOutOfRange { .. })
    ));

    let mismatched = Score {
        total: 100,
        social_relatedness: 1,
        circumscribed_interests: 1,
        language: 1,
        sensory_motor: 1,
    };
    assert!(matches!(
        validate_score(&mismatched),
        Err(ScoringError::Inconsistent { total: 100, sum: 4 })
    ));
}
