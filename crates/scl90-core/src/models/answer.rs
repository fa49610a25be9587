use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Item numbers are 1-based, as printed on the form.
pub type ItemId = u16;

/// One answer on the five-point severity scale (1 = not at all, 5 = extremely).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Response(u8);

impl Response {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Responses at or above this value make an item positive.
    pub const POSITIVE_THRESHOLD: u8 = 2;

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidResponse(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 >= Self::POSITIVE_THRESHOLD
    }
}

impl TryFrom<u8> for Response {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Response> for u8 {
    fn from(response: Response) -> Self {
        response.0
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The responses collected during one session, keyed by item id.
///
/// Serializes as a JSON object keyed by the item number, e.g.
/// `{"1": 3, "2": 1}`. An answer set is "complete" only relative to a
/// questionnaire; this type does not know how many items exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    responses: BTreeMap<ItemId, Response>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every item in `items` answered with the same `response`.
    pub fn filled(items: impl IntoIterator<Item = ItemId>, response: Response) -> Self {
        items.into_iter().map(|item| (item, response)).collect()
    }

    /// Set the response for an item, returning the previous one if any.
    pub fn insert(&mut self, item: ItemId, response: Response) -> Option<Response> {
        self.responses.insert(item, response)
    }

    /// Validate a raw value and record it.
    pub fn record(&mut self, item: ItemId, value: u8) -> Result<Option<Response>, CoreError> {
        Ok(self.insert(item, Response::new(value)?))
    }

    pub fn remove(&mut self, item: ItemId) -> Option<Response> {
        self.responses.remove(&item)
    }

    pub fn get(&self, item: ItemId) -> Option<Response> {
        self.responses.get(&item).copied()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.responses.contains_key(&item)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Answered items in ascending item order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, Response)> + '_ {
        self.responses.iter().map(|(item, response)| (*item, *response))
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromIterator<(ItemId, Response)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (ItemId, Response)>>(iter: I) -> Self {
        Self {
            responses: iter.into_iter().collect(),
        }
    }
}

impl Extend<(ItemId, Response)> for AnswerSet {
    fn extend<I: IntoIterator<Item = (ItemId, Response)>>(&mut self, iter: I) {
        self.responses.extend(iter);
    }
}
