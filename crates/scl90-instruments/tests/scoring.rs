use scl90_core::models::answer::{AnswerSet, Response};
use scl90_instruments::config::{Factor, Questionnaire};
use scl90_instruments::error::InstrumentError;
use scl90_instruments::levels::{FactorLevel, OverallLevel, PositiveLevel};
use scl90_instruments::scoring::{FactorResult, round2, score, sort_for_display};
use scl90_instruments::{Instrument, get_instrument, load_instrument};

fn scl90() -> Questionnaire {
    load_instrument("scl90").unwrap()
}

fn uniform(value: u8) -> AnswerSet {
    AnswerSet::filled(1..=90, Response::new(value).unwrap())
}

fn factor_result<'a>(
    result: &'a scl90_instruments::scoring::OverallResult,
    id: &str,
) -> &'a FactorResult {
    result
        .factor_results
        .iter()
        .find(|f| f.factor_id == id)
        .unwrap()
}

/// Answer the items of one factor with the given values, in order.
fn answer_factor(answers: &mut AnswerSet, questionnaire: &Questionnaire, id: &str, values: &[u8]) {
    let factor = questionnaire
        .factors()
        .iter()
        .find(|f| f.id == id)
        .unwrap();
    assert_eq!(factor.item_ids.len(), values.len());
    for (&item, &value) in factor.item_ids.iter().zip(values) {
        answers.record(item, value).unwrap();
    }
}

#[test]
fn all_ones_is_normal_everywhere() {
    let result = scl90().score(&uniform(1));

    assert_eq!(result.total_score, 90);
    assert_eq!(result.total_avg, 1.0);
    assert_eq!(result.positive_count, 0);
    assert_eq!(result.factor_results.len(), 10);
    assert!(
        result
            .factor_results
            .iter()
            .all(|f| f.level == FactorLevel::Normal && f.avg_score == 1.0)
    );
    assert_eq!(result.overall_level, OverallLevel::Normal);
    assert_eq!(result.positive_level, PositiveLevel::Low);
    assert_eq!(
        result.score_interpretation,
        OverallLevel::Normal.narrative()
    );
}

#[test]
fn all_fours_is_not_clamped() {
    let result = scl90().score(&uniform(4));

    assert_eq!(result.total_score, 360);
    assert_eq!(result.total_avg, 4.0);
    assert_eq!(result.positive_count, 90);
    assert!(
        result
            .factor_results
            .iter()
            .all(|f| f.level == FactorLevel::Severe)
    );
    assert_eq!(result.overall_level, OverallLevel::Severe);
    assert_eq!(result.positive_level, PositiveLevel::Severe);
    assert_eq!(
        result.positive_interpretation,
        PositiveLevel::Severe.narrative()
    );
}

#[test]
fn all_fives_counts_every_item_positive() {
    let result = scl90().score(&uniform(5));
    assert_eq!(result.total_score, 450);
    assert_eq!(result.total_avg, 5.0);
    assert_eq!(result.positive_count, 90);
}

#[test]
fn factor_bands_close_at_their_lower_bound() {
    let questionnaire = scl90();
    let mut answers = uniform(1);
    // hostility has six items
    answer_factor(&mut answers, &questionnaire, "hostility", &[2, 2, 2, 2, 2, 2]);
    // paranoid ideation has six items
    answer_factor(&mut answers, &questionnaire, "paranoid_ideation", &[3, 2, 3, 2, 3, 2]);
    // phobic anxiety has seven items: 14 / 7 = 2.0 exactly
    answer_factor(&mut answers, &questionnaire, "phobic_anxiety", &[2, 2, 2, 2, 2, 2, 2]);

    let mut severe = uniform(1);
    answer_factor(&mut severe, &questionnaire, "hostility", &[4, 3, 4, 3, 4, 3]);

    let result = questionnaire.score(&answers);
    let hostility = factor_result(&result, "hostility");
    assert_eq!(hostility.avg_score, 2.0);
    assert_eq!(hostility.total_score, 12);
    assert_eq!(hostility.level, FactorLevel::Mild);

    let paranoid = factor_result(&result, "paranoid_ideation");
    assert_eq!(paranoid.avg_score, 2.5);
    assert_eq!(paranoid.level, FactorLevel::Moderate);

    assert_eq!(factor_result(&result, "phobic_anxiety").level, FactorLevel::Mild);

    let result = questionnaire.score(&severe);
    let hostility = factor_result(&result, "hostility");
    assert_eq!(hostility.avg_score, 3.5);
    assert_eq!(hostility.level, FactorLevel::Severe);
}

#[test]
fn factor_level_thresholds() {
    assert_eq!(FactorLevel::from_avg(0.0), FactorLevel::Normal);
    assert_eq!(FactorLevel::from_avg(1.99), FactorLevel::Normal);
    assert_eq!(FactorLevel::from_avg(2.0), FactorLevel::Mild);
    assert_eq!(FactorLevel::from_avg(2.49), FactorLevel::Mild);
    assert_eq!(FactorLevel::from_avg(2.5), FactorLevel::Moderate);
    assert_eq!(FactorLevel::from_avg(3.49), FactorLevel::Moderate);
    assert_eq!(FactorLevel::from_avg(3.5), FactorLevel::Severe);
    assert_eq!(FactorLevel::from_avg(5.0), FactorLevel::Severe);
}

#[test]
fn overall_level_uses_either_measure() {
    assert_eq!(OverallLevel::classify(251, 2.79), OverallLevel::Severe);
    assert_eq!(OverallLevel::classify(250, 2.78), OverallLevel::Moderate);
    assert_eq!(OverallLevel::classify(0, 3.01), OverallLevel::Severe);
    assert_eq!(OverallLevel::classify(201, 2.23), OverallLevel::Moderate);
    assert_eq!(OverallLevel::classify(200, 2.22), OverallLevel::Mild);
    assert_eq!(OverallLevel::classify(0, 2.51), OverallLevel::Moderate);
    assert_eq!(OverallLevel::classify(161, 1.79), OverallLevel::Mild);
    assert_eq!(OverallLevel::classify(160, 1.78), OverallLevel::Normal);
    assert_eq!(OverallLevel::classify(0, 2.01), OverallLevel::Mild);
    assert_eq!(OverallLevel::classify(90, 1.0), OverallLevel::Normal);
}

#[test]
fn positive_count_bands() {
    assert_eq!(PositiveLevel::from_count(0), PositiveLevel::Low);
    assert_eq!(PositiveLevel::from_count(19), PositiveLevel::Low);
    assert_eq!(PositiveLevel::from_count(20), PositiveLevel::Moderate);
    assert_eq!(PositiveLevel::from_count(29), PositiveLevel::Moderate);
    assert_eq!(PositiveLevel::from_count(30), PositiveLevel::High);
    assert_eq!(PositiveLevel::from_count(42), PositiveLevel::High);
    assert_eq!(PositiveLevel::from_count(43), PositiveLevel::Severe);
    assert_eq!(PositiveLevel::from_count(90), PositiveLevel::Severe);
}

#[test]
fn partial_answers_are_excluded_not_zeroed() {
    let questionnaire = scl90();
    let mut answers = AnswerSet::new();
    // depression items 5 and 14 only
    answers.record(5, 4).unwrap();
    answers.record(14, 3).unwrap();

    let result = questionnaire.score(&answers);
    assert_eq!(result.total_score, 7);
    assert_eq!(result.total_avg, round2(7.0 / 90.0));
    assert_eq!(result.positive_count, 2);

    let depression = factor_result(&result, "depression");
    assert_eq!(depression.total_score, 7);
    assert_eq!(depression.avg_score, 3.5);
    assert_eq!(depression.level, FactorLevel::Severe);

    let anxiety = factor_result(&result, "anxiety");
    assert_eq!(anxiety.total_score, 0);
    assert_eq!(anxiety.avg_score, 0.0);
    assert_eq!(anxiety.level, FactorLevel::Normal);
}

#[test]
fn averages_round_half_away_from_zero() {
    let questionnaire = Questionnaire::new(
        vec![Factor {
            id: "only".to_string(),
            name: "Only".to_string(),
            item_ids: (1..=8).collect(),
            description: String::new(),
        }],
        8,
    )
    .unwrap();

    // 19 / 8 = 2.375
    let mut answers = AnswerSet::filled(1..=8, Response::new(2).unwrap());
    answers.record(1, 5).unwrap();
    let result = questionnaire.score(&answers);
    assert_eq!(result.factor_results[0].avg_score, 2.38);

    // 13 / 6 = 2.1666...
    assert_eq!(round2(13.0 / 6.0), 2.17);
    assert_eq!(round2(2.0 / 3.0), 0.67);
}

#[test]
fn unknown_items_are_ignored() {
    let mut answers = uniform(1);
    answers.record(91, 5).unwrap();
    answers.record(0, 5).unwrap();

    let result = scl90().score(&answers);
    assert_eq!(result.total_score, 90);
    assert_eq!(result.positive_count, 0);
}

#[test]
fn results_sorted_by_level_then_average() {
    let questionnaire = scl90();
    let mut answers = uniform(1);
    answer_factor(&mut answers, &questionnaire, "hostility", &[2, 2, 2, 2, 2, 3]);
    answer_factor(&mut answers, &questionnaire, "anxiety", &[4; 10]);
    answer_factor(&mut answers, &questionnaire, "paranoid_ideation", &[3; 6]);
    answer_factor(&mut answers, &questionnaire, "depression", &[5; 13]);

    let result = questionnaire.score(&answers);
    let order: Vec<&str> = result
        .factor_results
        .iter()
        .take(4)
        .map(|f| f.factor_id.as_str())
        .collect();
    assert_eq!(order, ["depression", "anxiety", "paranoid_ideation", "hostility"]);

    // the remaining Normal factors keep configuration order
    let rest: Vec<&str> = result.factor_results[4..]
        .iter()
        .map(|f| f.factor_id.as_str())
        .collect();
    assert_eq!(
        rest,
        [
            "somatization",
            "obsessive_compulsive",
            "interpersonal_sensitivity",
            "phobic_anxiety",
            "psychoticism",
            "additional",
        ]
    );
}

#[test]
fn sort_is_stable_for_ties() {
    let result = |id: &str, avg: f64| FactorResult {
        factor_id: id.to_string(),
        name: id.to_string(),
        total_score: 0,
        avg_score: avg,
        level: FactorLevel::from_avg(avg),
    };
    let mut results = vec![
        result("a", 2.2),
        result("b", 3.0),
        result("c", 2.2),
        result("d", 2.4),
        result("e", 2.2),
    ];
    sort_for_display(&mut results);

    let order: Vec<&str> = results.iter().map(|f| f.factor_id.as_str()).collect();
    assert_eq!(order, ["b", "d", "a", "c", "e"]);
}

#[test]
fn score_requires_a_valid_partition() {
    let factors = get_instrument("scl90").unwrap().factors().to_vec();
    let result = score(&uniform(2), &factors).unwrap();
    assert_eq!(result.total_score, 180);
    assert_eq!(result.overall_level, OverallLevel::Mild);

    let mut broken = factors.clone();
    broken[0].item_ids.pop();
    assert!(matches!(
        score(&uniform(2), &broken),
        Err(InstrumentError::InvalidInput(_))
    ));

    let mut duplicated = factors;
    duplicated[1].item_ids.push(1);
    assert!(matches!(
        score(&uniform(2), &duplicated),
        Err(InstrumentError::InvalidInput(_))
    ));
}

#[test]
fn score_complete_reports_first_gap() {
    let questionnaire = scl90();
    let mut answers = uniform(3);
    answers.remove(17);
    answers.remove(42);

    match questionnaire.score_complete(&answers) {
        Err(InstrumentError::Incomplete {
            first_unanswered,
            missing,
        }) => {
            assert_eq!(first_unanswered, 17);
            assert_eq!(missing, 2);
        }
        other => panic!("expected Incomplete, got {other:?}"),
    }

    answers.record(17, 3).unwrap();
    answers.record(42, 3).unwrap();
    let result = questionnaire.score_complete(&answers).unwrap();
    assert_eq!(result.total_score, 270);
}

#[test]
fn result_serializes_with_snake_case_levels() {
    let result = scl90().score(&uniform(1));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["overall_level"], "normal");
    assert_eq!(json["positive_level"], "low");
    assert_eq!(json["factor_results"][0]["level"], "normal");
}
