use scl90_core::models::answer::AnswerSet;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::config::{Factor, Questionnaire};
use crate::error::InstrumentError;
use crate::instruments::scl90;
use crate::levels::{FactorLevel, OverallLevel, PositiveLevel};

/// Score for one factor, recomputed from the answer set on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FactorResult {
    pub factor_id: String,
    pub name: String,
    /// Sum of the answered items in this factor.
    pub total_score: u32,
    /// `total_score` over the number of answered items, to 2 decimals.
    /// Zero when nothing in the factor was answered.
    pub avg_score: f64,
    pub level: FactorLevel,
}

/// The complete output of one scoring run. This is the only figure set the
/// presentation layer may draw from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OverallResult {
    /// Sum of every response, not normalized and not clamped.
    pub total_score: u32,
    /// `total_score` over the item count, to 2 decimals.
    pub total_avg: f64,
    /// Responses of 2 or more.
    pub positive_count: u32,
    /// Most severe first; see [`sort_for_display`].
    pub factor_results: Vec<FactorResult>,
    pub overall_level: OverallLevel,
    pub score_interpretation: String,
    pub positive_level: PositiveLevel,
    pub positive_interpretation: String,
}

/// Score `answers` against a factor table that must partition the SCL-90
/// item range.
///
/// Validates the table on every call; prefer [`Questionnaire::score`] when
/// the table has already been loaded.
pub fn score(answers: &AnswerSet, factors: &[Factor]) -> Result<OverallResult, InstrumentError> {
    let questionnaire = Questionnaire::new(factors.to_vec(), scl90::ITEM_COUNT)?;
    Ok(questionnaire.score(answers))
}

impl Questionnaire {
    /// Score a possibly partial answer set. Missing items are left out of
    /// both the sum and the count; they are never treated as zero.
    pub fn score(&self, answers: &AnswerSet) -> OverallResult {
        let mut total_score = 0u32;
        let mut positive_count = 0u32;
        for (item, response) in answers.iter() {
            if !self.contains_item(item) {
                debug!(item, "ignoring response for unknown item");
                continue;
            }
            total_score += u32::from(response.value());
            if response.is_positive() {
                positive_count += 1;
            }
        }

        let mut factor_results: Vec<FactorResult> = self
            .factors()
            .iter()
            .map(|factor| score_factor(factor, answers))
            .collect();
        sort_for_display(&mut factor_results);

        let total_avg = round2(f64::from(total_score) / f64::from(self.item_count()));
        let overall_level = OverallLevel::classify(total_score, total_avg);
        let positive_level = PositiveLevel::from_count(positive_count);

        debug!(
            total_score,
            total_avg,
            positive_count,
            answered = answers.len(),
            "scored answer set"
        );

        OverallResult {
            total_score,
            total_avg,
            positive_count,
            factor_results,
            overall_level,
            score_interpretation: overall_level.narrative().to_string(),
            positive_level,
            positive_interpretation: positive_level.narrative().to_string(),
        }
    }

    /// Score an answer set that must cover every item, as required for a
    /// final report.
    pub fn score_complete(&self, answers: &AnswerSet) -> Result<OverallResult, InstrumentError> {
        if let Some(first_unanswered) = self.first_unanswered(answers) {
            return Err(InstrumentError::Incomplete {
                first_unanswered,
                missing: self.missing_count(answers),
            });
        }
        Ok(self.score(answers))
    }
}

fn score_factor(factor: &Factor, answers: &AnswerSet) -> FactorResult {
    let (total_score, answered) = factor
        .item_ids
        .iter()
        .filter_map(|&item| answers.get(item))
        .fold((0u32, 0u32), |(sum, count), response| {
            (sum + u32::from(response.value()), count + 1)
        });

    let avg_score = if answered == 0 {
        0.0
    } else {
        round2(f64::from(total_score) / f64::from(answered))
    };

    FactorResult {
        factor_id: factor.id.clone(),
        name: factor.name.clone(),
        total_score,
        avg_score,
        level: FactorLevel::from_avg(avg_score),
    }
}

/// Most severe level first, then highest average. The sort is stable, so
/// ties keep their configuration order.
pub fn sort_for_display(results: &mut [FactorResult]) {
    results.sort_by(|a, b| {
        b.level
            .rank()
            .cmp(&a.level.rank())
            .then_with(|| b.avg_score.total_cmp(&a.avg_score))
    });
}

/// Round to 2 decimals, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
