use std::collections::BTreeMap;

use raads_core::error::CoreError;
use raads_core::models::answer::{Answer, AnswerSheet, Choice};

#[test]
fn choice_accepts_only_zero_through_three() {
    for (index, expected) in Choice::ALL.iter().enumerate() {
        assert_eq!(Choice::try_from(index as i64).unwrap(), *expected);
    }
    assert!(matches!(Choice::try_from(4i64), Err(CoreError::InvalidChoice(4))));
    assert!(matches!(Choice::try_from(-1i64), Err(CoreError::InvalidChoice(-1))));
}

#[test]
fn choice_labels_match_option_text() {
    assert_eq!(Choice::TrueNowAndWhenYoung.label(), "True now and when I was young");
    assert_eq!(Choice::TrueNowOnly.label(), "True now only");
    assert_eq!(Choice::TrueOnlyWhenYounger.label(), "True only when I was younger than 16");
    assert_eq!(Choice::NeverTrue.label(), "Never true");
}

#[test]
fn sheet_deserializes_from_id_keyed_object() {
    let sheet: AnswerSheet = serde_json::from_str(r#"{"1": 0, "2": 3, "80": 1}"#).unwrap();
    assert_eq!(sheet.len(), 3);
    assert_eq!(sheet.get(1), Some(Choice::TrueNowAndWhenYoung));
    assert_eq!(sheet.get(2), Some(Choice::NeverTrue));
    assert_eq!(sheet.get(80), Some(Choice::TrueNowOnly));
    assert_eq!(sheet.get(3), None);
}

#[test]
fn sheet_rejects_out_of_range_choice_on_the_wire() {
    let result: Result<AnswerSheet, _> = serde_json::from_str(r#"{"1": 4}"#);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("invalid choice index 4"), "unexpected error: {err}");
}

#[test]
fn sheet_serializes_choices_as_indices() {
    let mut sheet = AnswerSheet::new();
    sheet.insert(5, Choice::TrueOnlyWhenYounger);
    assert_eq!(serde_json::to_string(&sheet).unwrap(), r#"{"5":2}"#);
}

#[test]
fn from_answers_rejects_duplicates() {
    let answers = [
        Answer { question_id: 7, choice: Choice::NeverTrue },
        Answer { question_id: 7, choice: Choice::TrueNowOnly },
    ];
    assert!(matches!(
        AnswerSheet::from_answers(answers),
        Err(CoreError::DuplicateAnswer(7))
    ));
}

#[test]
fn from_raw_rejects_invalid_index() {
    let result = AnswerSheet::from_raw([(1, 0), (2, 9)]);
    assert!(matches!(result, Err(CoreError::InvalidChoice(9))));
}

#[test]
fn presentation_order_maps_back_to_question_ids() {
    let ids = [10u8, 20, 30];
    let mut positional = BTreeMap::new();
    positional.insert(0, Choice::NeverTrue);
    positional.insert(2, Choice::TrueNowOnly);

    let sheet = AnswerSheet::from_presentation_order(&positional, &ids).unwrap();
    assert_eq!(sheet.get(10), Some(Choice::NeverTrue));
    assert_eq!(sheet.get(30), Some(Choice::TrueNowOnly));
    assert_eq!(sheet.get(20), None);

    positional.insert(3, Choice::NeverTrue);
    assert!(matches!(
        AnswerSheet::from_presentation_order(&positional, &ids),
        Err(CoreError::PresentationIndex { index: 3, len: 3 })
    ));
}

#[test]
fn missing_lists_unanswered_ids_in_bank_order() {
    let sheet: AnswerSheet = [Answer { question_id: 2, choice: Choice::NeverTrue }]
        .into_iter()
        .collect();
    assert_eq!(sheet.missing([3, 1, 2]), vec![3, 1]);
    assert!(!sheet.is_complete([1, 2]));
    assert!(sheet.is_complete([2]));
}

#[test]
fn later_answers_replace_earlier_when_collected() {
    let sheet: AnswerSheet = [
        Answer { question_id: 4, choice: Choice::NeverTrue },
        Answer { question_id: 4, choice: Choice::TrueNowOnly },
    ]
    .into_iter()
    .collect();
    assert_eq!(sheet.len(), 1);
    assert_eq!(sheet.get(4), Some(Choice::TrueNowOnly));
}
