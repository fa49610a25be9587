//! Severity bands.
//!
//! Three separate classifiers with their own cutoffs: per-factor average,
//! overall score, and positive-item count. They are not interchangeable.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Severity of a single factor, from its average item score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FactorLevel {
    Normal,
    Mild,
    Moderate,
    Severe,
}

impl FactorLevel {
    /// Half-open bands, checked from the top: `[3.5, ∞)` severe,
    /// `[2.5, 3.5)` moderate, `[2.0, 2.5)` mild, below 2.0 normal.
    pub fn from_avg(avg_score: f64) -> Self {
        if avg_score >= 3.5 {
            FactorLevel::Severe
        } else if avg_score >= 2.5 {
            FactorLevel::Moderate
        } else if avg_score >= 2.0 {
            FactorLevel::Mild
        } else {
            FactorLevel::Normal
        }
    }

    /// Sort key for display, most severe highest.
    pub fn rank(self) -> u8 {
        match self {
            FactorLevel::Normal => 0,
            FactorLevel::Mild => 1,
            FactorLevel::Moderate => 2,
            FactorLevel::Severe => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FactorLevel::Normal => "Normal",
            FactorLevel::Mild => "Mild",
            FactorLevel::Moderate => "Moderate",
            FactorLevel::Severe => "Severe",
        }
    }
}

/// Overall severity, from the total score and total average together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OverallLevel {
    Normal,
    Mild,
    Moderate,
    Severe,
}

impl OverallLevel {
    /// Each band triggers on either measure. The average branch is kept
    /// even though it almost always agrees with the total.
    pub fn classify(total_score: u32, total_avg: f64) -> Self {
        if total_score > 250 || total_avg > 3.0 {
            OverallLevel::Severe
        } else if total_score > 200 || total_avg > 2.5 {
            OverallLevel::Moderate
        } else if total_score > 160 || total_avg > 2.0 {
            OverallLevel::Mild
        } else {
            OverallLevel::Normal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OverallLevel::Normal => "Normal",
            OverallLevel::Mild => "Mild",
            OverallLevel::Moderate => "Moderately severe",
            OverallLevel::Severe => "Severe",
        }
    }

    pub fn narrative(self) -> &'static str {
        match self {
            OverallLevel::Normal => {
                "Your overall symptom level is within the normal range. You appear to be \
                 coping well with day-to-day stress. Keep up regular sleep, exercise and \
                 social contact."
            }
            OverallLevel::Mild => {
                "Your overall score is mildly elevated. You may have felt under strain \
                 recently. Pay attention to rest and consider talking things over with \
                 someone you trust; if the feelings persist, a counsellor can help."
            }
            OverallLevel::Moderate => {
                "Your overall score is clearly elevated, suggesting noticeable distress \
                 that may be affecting daily life. A consultation with a mental health \
                 professional is recommended."
            }
            OverallLevel::Severe => {
                "Your overall score is high, indicating significant distress across \
                 several areas. Please seek help from a qualified mental health \
                 professional as soon as possible."
            }
        }
    }
}

/// Band for the number of positive items (response of 2 or more).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PositiveLevel {
    Low,
    Moderate,
    High,
    Severe,
}

impl PositiveLevel {
    pub fn from_count(positive_count: u32) -> Self {
        match positive_count {
            43.. => PositiveLevel::Severe,
            30..=42 => PositiveLevel::High,
            20..=29 => PositiveLevel::Moderate,
            _ => PositiveLevel::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PositiveLevel::Low => "Low",
            PositiveLevel::Moderate => "Moderate",
            PositiveLevel::High => "High",
            PositiveLevel::Severe => "Severe",
        }
    }

    pub fn narrative(self) -> &'static str {
        match self {
            PositiveLevel::Low => {
                "Few symptoms were reported, and their range is narrow."
            }
            PositiveLevel::Moderate => {
                "A moderate number of symptoms were reported. Some areas deserve attention."
            }
            PositiveLevel::High => {
                "Many symptoms were reported across different areas. Professional advice \
                 is recommended."
            }
            PositiveLevel::Severe => {
                "A large number of symptoms were reported across most areas. Please seek \
                 professional help promptly."
            }
        }
    }
}
