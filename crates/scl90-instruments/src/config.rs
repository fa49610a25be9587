use std::collections::HashSet;

use scl90_core::models::answer::{AnswerSet, ItemId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;

/// A named symptom dimension grouping a fixed subset of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Factor {
    pub id: String,
    pub name: String,
    pub item_ids: Vec<ItemId>,
    pub description: String,
}

/// One inventory item and the factor it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: ItemId,
    pub factor_id: String,
}

/// One point on the answer scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseOption {
    pub value: u8,
    pub label: &'static str,
}

/// A factor table that has been checked to partition `1..=item_count`
/// exactly once.
///
/// Built once at startup; scoring against it cannot fail.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    factors: Vec<Factor>,
    item_count: ItemId,
    /// `owner[item - 1]` is the index of the factor holding `item`.
    owner: Vec<usize>,
}

impl Questionnaire {
    pub fn new(factors: Vec<Factor>, item_count: ItemId) -> Result<Self, InstrumentError> {
        if item_count == 0 {
            return Err(invalid("questionnaire has no items"));
        }

        let mut factor_ids = HashSet::new();
        let mut owner: Vec<Option<usize>> = vec![None; usize::from(item_count)];

        for (index, factor) in factors.iter().enumerate() {
            if factor.id.trim().is_empty() {
                return Err(invalid(format!("factor #{} has an empty id", index + 1)));
            }
            if !factor_ids.insert(factor.id.clone()) {
                return Err(invalid(format!("factor '{}' is defined twice", factor.id)));
            }
            if factor.item_ids.is_empty() {
                return Err(invalid(format!("factor '{}' has no items", factor.id)));
            }

            for &item in &factor.item_ids {
                if item == 0 || item > item_count {
                    return Err(invalid(format!(
                        "factor '{}' lists item {item}, outside 1..={item_count}",
                        factor.id
                    )));
                }
                let slot = &mut owner[usize::from(item - 1)];
                if let Some(previous) = *slot {
                    return Err(invalid(format!(
                        "item {item} is listed by both '{}' and '{}'",
                        factors[previous].id, factor.id
                    )));
                }
                *slot = Some(index);
            }
        }

        let owner = owner
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.ok_or_else(|| invalid(format!("item {} belongs to no factor", i + 1)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            factors,
            item_count,
            owner,
        })
    }

    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    pub fn item_count(&self) -> ItemId {
        self.item_count
    }

    pub fn contains_item(&self, item: ItemId) -> bool {
        (1..=self.item_count).contains(&item)
    }

    /// The factor holding `item`, or `None` outside the item range.
    pub fn factor_of(&self, item: ItemId) -> Option<&Factor> {
        if !self.contains_item(item) {
            return None;
        }
        self.owner
            .get(usize::from(item - 1))
            .map(|&index| &self.factors[index])
    }

    /// The flat item list, ordered by item id.
    pub fn items(&self) -> Vec<Item> {
        (1..=self.item_count)
            .zip(&self.owner)
            .map(|(id, &index)| Item {
                id,
                factor_id: self.factors[index].id.clone(),
            })
            .collect()
    }

    /// Lowest item id without a response.
    pub fn first_unanswered(&self, answers: &AnswerSet) -> Option<ItemId> {
        (1..=self.item_count).find(|item| !answers.contains(*item))
    }

    pub fn missing_count(&self, answers: &AnswerSet) -> usize {
        (1..=self.item_count)
            .filter(|item| !answers.contains(*item))
            .count()
    }

    pub fn is_complete(&self, answers: &AnswerSet) -> bool {
        self.first_unanswered(answers).is_none()
    }
}

fn invalid(reason: impl Into<String>) -> InstrumentError {
    InstrumentError::InvalidInput(reason.into())
}
