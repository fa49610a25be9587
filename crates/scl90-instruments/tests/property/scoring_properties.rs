use proptest::prelude::*;
use scl90_core::models::answer::{AnswerSet, Response};
use scl90_instruments::load_instrument;

fn full_answers() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(1u8..=5, 90)
}

fn partial_answers() -> impl Strategy<Value = Vec<Option<u8>>> {
    proptest::collection::vec(proptest::option::of(1u8..=5), 90)
}

fn to_answer_set(values: &[u8]) -> AnswerSet {
    (1u16..)
        .zip(values)
        .map(|(item, &value)| (item, Response::new(value).unwrap()))
        .collect()
}

proptest! {
    #[test]
    fn total_is_the_exact_sum(values in full_answers()) {
        let result = load_instrument("scl90").unwrap().score(&to_answer_set(&values));
        let sum: u32 = values.iter().map(|&v| u32::from(v)).sum();
        prop_assert_eq!(result.total_score, sum);
        prop_assert!(result.total_avg >= 0.0 && result.total_avg <= 5.0);
    }

    #[test]
    fn positive_count_matches_threshold(values in full_answers()) {
        let result = load_instrument("scl90").unwrap().score(&to_answer_set(&values));
        let expected = values.iter().filter(|&&v| v >= 2).count() as u32;
        prop_assert_eq!(result.positive_count, expected);
    }

    #[test]
    fn complete_factor_averages_stay_on_scale(values in full_answers()) {
        let result = load_instrument("scl90").unwrap().score(&to_answer_set(&values));
        for factor in &result.factor_results {
            prop_assert!(
                factor.avg_score >= 1.0 && factor.avg_score <= 5.0,
                "{} avg {}", factor.factor_id, factor.avg_score
            );
        }
    }

    #[test]
    fn display_order_is_non_increasing(values in full_answers()) {
        let result = load_instrument("scl90").unwrap().score(&to_answer_set(&values));
        for pair in result.factor_results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.level.rank() >= b.level.rank());
            if a.level == b.level {
                prop_assert!(a.avg_score >= b.avg_score);
            }
        }
    }

    #[test]
    fn partial_sets_sum_only_present_answers(values in partial_answers()) {
        let questionnaire = load_instrument("scl90").unwrap();
        let answers: AnswerSet = (1u16..)
            .zip(&values)
            .filter_map(|(item, value)| value.map(|v| (item, Response::new(v).unwrap())))
            .collect();
        let result = questionnaire.score(&answers);

        let sum: u32 = values.iter().flatten().map(|&v| u32::from(v)).sum();
        prop_assert_eq!(result.total_score, sum);

        for factor in questionnaire.factors() {
            let answered = factor.item_ids.iter().filter(|&&i| answers.contains(i)).count();
            let scored = result
                .factor_results
                .iter()
                .find(|f| f.factor_id == factor.id)
                .unwrap();
            if answered == 0 {
                prop_assert_eq!(scored.avg_score, 0.0);
                prop_assert_eq!(scored.total_score, 0);
            } else {
                prop_assert!(scored.avg_score >= 1.0 && scored.avg_score <= 5.0);
            }
        }
    }
}
