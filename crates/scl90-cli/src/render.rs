use std::fmt::{self, Write};

use scl90_instruments::config::Questionnaire;
use scl90_instruments::levels::FactorLevel;
use scl90_instruments::scoring::OverallResult;

/// Share of items answered 2 or above, as a percentage.
///
/// Derived here from the engine's count; the engine itself never reports it.
pub fn positive_percentage(positive_count: u32, item_count: u16) -> f64 {
    if item_count == 0 {
        return 0.0;
    }
    f64::from(positive_count) / f64::from(item_count) * 100.0
}

/// Plain-text report for a terminal. Factors above the normal band get
/// their description underneath.
pub fn render_report(
    result: &OverallResult,
    questionnaire: &Questionnaire,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, result, questionnaire)?;
    Ok(out)
}

fn write_report(
    out: &mut impl Write,
    result: &OverallResult,
    questionnaire: &Questionnaire,
) -> fmt::Result {
    let item_count = questionnaire.item_count();

    writeln!(out, "## SCL-90 result\n")?;
    writeln!(
        out,
        "Total score:    {} (average {:.2})",
        result.total_score, result.total_avg
    )?;
    writeln!(
        out,
        "Positive items: {} of {} ({:.1}%)",
        result.positive_count,
        item_count,
        positive_percentage(result.positive_count, item_count)
    )?;
    writeln!(out, "Overall level:  {}\n", result.overall_level.label())?;
    writeln!(out, "{}\n", result.score_interpretation)?;
    writeln!(
        out,
        "Symptom breadth: {}. {}\n",
        result.positive_level.label(),
        result.positive_interpretation
    )?;

    writeln!(out, "### Factors\n")?;
    writeln!(out, "{:<28} {:>6} {:>8}  {}", "Factor", "Total", "Average", "Level")?;
    for factor in &result.factor_results {
        writeln!(
            out,
            "{:<28} {:>6} {:>8.2}  {}",
            factor.name,
            factor.total_score,
            factor.avg_score,
            factor.level.label()
        )?;
    }

    let elevated: Vec<_> = result
        .factor_results
        .iter()
        .filter(|f| f.level != FactorLevel::Normal)
        .filter_map(|f| questionnaire.factors().iter().find(|d| d.id == f.factor_id))
        .collect();
    if !elevated.is_empty() {
        writeln!(out, "\n### Elevated factors\n")?;
        for factor in elevated {
            writeln!(out, "- {}: {}", factor.name, factor.description)?;
        }
    }

    writeln!(
        out,
        "\nThis report follows the SCL-90 scoring rules and is not a diagnosis."
    )
}
