use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the four response options, identified on the wire by its index.
///
/// Raw integers only become a `Choice` through [`TryFrom`], so an
/// out-of-range index is rejected before it can reach a scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum Choice {
    TrueNowAndWhenYoung = 0,
    TrueNowOnly = 1,
    TrueOnlyWhenYounger = 2,
    NeverTrue = 3,
}

impl Choice {
    /// Presentation order of the options.
    pub const ALL: [Choice; 4] = [
        Choice::TrueNowAndWhenYoung,
        Choice::TrueNowOnly,
        Choice::TrueOnlyWhenYounger,
        Choice::NeverTrue,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Choice::TrueNowAndWhenYoung => "True now and when I was young",
            Choice::TrueNowOnly => "True now only",
            Choice::TrueOnlyWhenYounger => "True only when I was younger than 16",
            Choice::NeverTrue => "Never true",
        }
    }
}

impl TryFrom<i64> for Choice {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Choice::TrueNowAndWhenYoung),
            1 => Ok(Choice::TrueNowOnly),
            2 => Ok(Choice::TrueOnlyWhenYounger),
            3 => Ok(Choice::NeverTrue),
            other => Err(CoreError::InvalidChoice(other)),
        }
    }
}

impl TryFrom<u8> for Choice {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Choice::try_from(i64::from(value))
    }
}

impl From<Choice> for u8 {
    fn from(choice: Choice) -> Self {
        choice as u8
    }
}

/// A respondent's answer to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub question_id: u8,
    #[ts(type = "number")]
    pub choice: Choice,
}

/// Human-readable echo of an answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerDetail {
    pub id: u8,
    pub text: String,
    pub answer: String,
}

/// Answers keyed by question id, at most one per question.
///
/// A sheet may be partial: scoring simply skips questions without an entry.
/// On the wire it is a JSON object mapping question id to choice index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    choices: BTreeMap<u8, Choice>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the previous choice if the question was
    /// already answered.
    pub fn insert(&mut self, question_id: u8, choice: Choice) -> Option<Choice> {
        self.choices.insert(question_id, choice)
    }

    pub fn remove(&mut self, question_id: u8) -> Option<Choice> {
        self.choices.remove(&question_id)
    }

    /// Build a sheet from a list of answers. Two answers for the same
    /// question are rejected rather than silently overwritten.
    pub fn from_answers<I>(answers: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = Answer>,
    {
        let mut choices = BTreeMap::new();
        for answer in answers {
            match choices.entry(answer.question_id) {
                Entry::Vacant(slot) => {
                    slot.insert(answer.choice);
                }
                Entry::Occupied(_) => return Err(CoreError::DuplicateAnswer(answer.question_id)),
            }
        }
        Ok(Self { choices })
    }

    /// Build a sheet from raw `(question_id, choice_index)` pairs, rejecting
    /// any index outside 0..=3.
    pub fn from_raw<I>(raw: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (u8, i64)>,
    {
        let answers = raw
            .into_iter()
            .map(|(question_id, index)| {
                Ok(Answer {
                    question_id,
                    choice: Choice::try_from(index)?,
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;
        Self::from_answers(answers)
    }

    /// Build a sheet from answers keyed by 0-based presentation position.
    /// `question_ids` is the bank in presentation order and maps each
    /// position back to its question id.
    pub fn from_presentation_order(
        positional: &BTreeMap<usize, Choice>,
        question_ids: &[u8],
    ) -> Result<Self, CoreError> {
        let mut choices = BTreeMap::new();
        for (&index, &choice) in positional {
            let id = question_ids
                .get(index)
                .copied()
                .ok_or(CoreError::PresentationIndex {
                    index,
                    len: question_ids.len(),
                })?;
            choices.insert(id, choice);
        }
        Ok(Self { choices })
    }

    pub fn get(&self, question_id: u8) -> Option<Choice> {
        self.choices.get(&question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Entries in ascending question id order.
    pub fn iter(&self) -> impl Iterator<Item = Answer> + '_ {
        self.choices.iter().map(|(&question_id, &choice)| Answer {
            question_id,
            choice,
        })
    }

    /// Ids from `question_ids` that have no answer yet, in the given order.
    pub fn missing<I>(&self, question_ids: I) -> Vec<u8>
    where
        I: IntoIterator<Item = u8>,
    {
        question_ids
            .into_iter()
            .filter(|id| !self.choices.contains_key(id))
            .collect()
    }

    pub fn is_complete<I>(&self, question_ids: I) -> bool
    where
        I: IntoIterator<Item = u8>,
    {
        self.missing(question_ids).is_empty()
    }
}

impl FromIterator<Answer> for AnswerSheet {
    /// Later answers for the same question replace earlier ones, matching
    /// how a respondent changes an answer.
    fn from_iter<T: IntoIterator<Item = Answer>>(iter: T) -> Self {
        let choices = iter
            .into_iter()
            .map(|a| (a.question_id, a.choice))
            .collect();
        Self { choices }
    }
}
