//! Tests for confusion matrix construction and metric derivation

#[cfg(test)]
mod tests {
    use crate::error::EvalError;
    use crate::eval::classification::{
        classification_report, confusion_matrix, matrix_report, metrics_report, round_to,
        BinaryConfusion, ConfusionMatrix, Evaluation, LabelOrder, LabelUniverse, MetricDeriver,
    };

    fn scenario() -> (Vec<&'static str>, Vec<&'static str>) {
        (vec!["2", "0", "0", "1", "2", "0"], vec!["2", "0", "0", "1", "2", "1"])
    }

    #[test]
    fn test_confusion_matrix_basic() {
        let (y_true, y_pred) = scenario();
        let cm = confusion_matrix(&y_true, &y_pred).unwrap();

        assert_eq!(cm.labels(), &["0", "1", "2"]);
        assert_eq!(cm.n_classes(), 3);
        assert_eq!(cm.matrix(), &[vec![2, 1, 0], vec![0, 1, 0], vec![0, 0, 2]]);
        assert_eq!(cm.diagonal_sum(), 5);
        assert_eq!(cm.total(), 6);
        assert_eq!(cm.index_of(&"2"), Some(2));
        assert_eq!(cm.index_of(&"7"), None);
    }

    #[test]
    fn test_row_and_column_sums_count_labels() {
        let (y_true, y_pred) = scenario();
        let cm = confusion_matrix(&y_true, &y_pred).unwrap();

        for (i, label) in cm.labels().iter().enumerate() {
            let in_true = y_true.iter().filter(|&l| l == label).count();
            let in_pred = y_pred.iter().filter(|&l| l == label).count();
            assert_eq!(cm.row_sum(i), in_true, "row sum of {label}");
            assert_eq!(cm.col_sum(i), in_pred, "column sum of {label}");
        }
    }

    #[test]
    fn test_label_only_in_predictions_joins_universe() {
        let y_true = vec![0, 0, 1];
        let y_pred = vec![0, 3, 1];
        let cm = confusion_matrix(&y_true, &y_pred).unwrap();

        assert_eq!(cm.labels(), &[0, 1, 3]);
        assert_eq!(cm.get(0, 2), 1); // True 0, predicted 3
        assert_eq!(cm.row_sum(2), 0);
    }

    #[test]
    fn test_first_seen_order() {
        let y_true = vec!["dog", "cat", "dog"];
        let y_pred = vec!["cat", "cat", "bird"];
        let cm =
            ConfusionMatrix::from_predictions_with_order(&y_true, &y_pred, LabelOrder::FirstSeen)
                .unwrap();

        assert_eq!(cm.labels(), &["dog", "cat", "bird"]);
        assert_eq!(cm.get(0, 1), 1); // True dog, predicted cat
        assert_eq!(cm.get(0, 2), 1); // True dog, predicted bird
        assert_eq!(cm.get(1, 1), 1);
    }

    #[test]
    fn test_unordered_label_type_with_first_seen_universe() {
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        enum Animal {
            Cat,
            Dog,
        }
        let y_true = vec![Animal::Dog, Animal::Cat];
        let y_pred = vec![Animal::Dog, Animal::Dog];
        let universe = LabelUniverse::first_seen(&y_true, &y_pred);
        let cm = ConfusionMatrix::with_universe(universe, &y_true, &y_pred).unwrap();

        assert_eq!(cm.labels(), &[Animal::Dog, Animal::Cat]);
        assert_eq!(cm.get(1, 0), 1);
    }

    #[test]
    fn test_label_outside_universe_is_rejected() {
        let universe = LabelUniverse::from_ordered(vec!["a", "b"]);
        let err = ConfusionMatrix::with_universe(universe, &["a", "c"], &["a", "b"]).unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput { .. }));
    }

    #[test]
    fn test_mismatched_lengths_are_invalid_input() {
        let err = confusion_matrix(&[1, 2, 3], &[1, 2]).unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput { .. }));
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_empty_input_is_invalid_input() {
        let y: Vec<u8> = vec![];
        let err = confusion_matrix(&y, &y).unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput { .. }));
        assert!(Evaluation::new(y.clone(), y).is_err());
    }

    #[test]
    fn test_binary_confusion_decomposition() {
        let (y_true, y_pred) = scenario();
        let cm = confusion_matrix(&y_true, &y_pred).unwrap();
        let deriver = MetricDeriver::new(&cm);

        assert_eq!(
            deriver.binary_confusion(0).unwrap(),
            BinaryConfusion { tp: 2, fn_: 1, fp: 0, tn: 3 }
        );
        assert_eq!(
            deriver.binary_confusion(1).unwrap(),
            BinaryConfusion { tp: 1, fn_: 0, fp: 1, tn: 4 }
        );
        assert_eq!(
            deriver.binary_confusion(2).unwrap(),
            BinaryConfusion { tp: 2, fn_: 0, fp: 0, tn: 4 }
        );

        for class in 0..cm.n_classes() {
            let bc = deriver.binary_confusion(class).unwrap();
            assert_eq!(bc.total(), cm.total());
            assert_eq!(bc.tp + bc.fn_, cm.row_sum(class));
            assert_eq!(bc.tp + bc.fp, cm.col_sum(class));
            assert_eq!(bc.fp, cm.false_positives(class));
            assert_eq!(bc.fn_, cm.false_negatives(class));
            assert_eq!(bc.tn, cm.true_negatives(class));
        }
    }

    #[test]
    fn test_binary_confusion_out_of_range() {
        let cm = confusion_matrix(&[0, 1], &[0, 1]).unwrap();
        let err = MetricDeriver::new(&cm).binary_confusion(2).unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput { .. }));
    }

    #[test]
    fn test_scenario_metrics() {
        let (y_true, y_pred) = scenario();
        let eval = Evaluation::new(y_true, y_pred).unwrap();

        assert_eq!(eval.accuracy().unwrap(), 0.8333);

        let recall = eval.recall();
        let precision = eval.precision();
        let specificity = eval.specificity().unwrap();
        let f1 = eval.f1();

        // Class "0": TP=2, FN=1, FP=0
        assert_eq!(recall.get(&"0"), Some(0.6667));
        assert_eq!(precision.get(&"0"), Some(1.0));
        assert_eq!(f1.get(&"0"), Some(0.8));

        // Class "1": TP=1, FP=1
        assert_eq!(recall.get(&"1"), Some(1.0));
        assert_eq!(precision.get(&"1"), Some(0.5));
        assert_eq!(specificity.get(&"1"), Some(0.8));
        assert_eq!(f1.get(&"1"), Some(0.6667));

        // Class "2": perfect
        assert_eq!(recall.get(&"2"), Some(1.0));
        assert_eq!(precision.get(&"2"), Some(1.0));
        assert_eq!(f1.get(&"2"), Some(1.0));
    }

    #[test]
    fn test_per_class_values_follow_canonical_order() {
        let eval = Evaluation::new(vec![3, 1, 2], vec![3, 1, 1]).unwrap();
        let labels: Vec<i32> = eval.recall().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_true_positives_reports_zero_recall_and_precision() {
        // Class 1 never predicted correctly: TP=0, FN=1, FP=0 (a genuine 0/0 for precision)
        let cm = confusion_matrix(&[0, 1], &[0, 0]).unwrap();
        let deriver = MetricDeriver::new(&cm);

        let bc = deriver.binary_confusion(1).unwrap();
        assert_eq!((bc.tp, bc.fp), (0, 0));
        assert_eq!(deriver.recall(1).unwrap(), 0.0);
        assert_eq!(deriver.precision(1).unwrap(), 0.0);
        assert_eq!(deriver.f1(1).unwrap(), 0.0);
    }

    #[test]
    fn test_single_class_specificity_is_degenerate() {
        // recall/precision are guarded, specificity is not
        let eval = Evaluation::new(vec!["a", "a", "a"], vec!["a", "a", "a"]).unwrap();
        let deriver = eval.deriver();

        assert_eq!(deriver.recall(0).unwrap(), 1.0);
        assert_eq!(deriver.precision(0).unwrap(), 1.0);

        let err = deriver.specificity(0).unwrap_err();
        assert!(matches!(err, EvalError::DegenerateInput { .. }));
        assert!(eval.specificity().is_err());
        assert!(matches!(eval.report(), Err(EvalError::DegenerateInput { .. })));
    }

    #[test]
    fn test_f1_zero_when_precision_or_recall_zero() {
        let bc = BinaryConfusion { tp: 0, fn_: 3, fp: 2, tn: 5 };
        assert_eq!(bc.f1(), 0.0);

        let bc = BinaryConfusion { tp: 2, fn_: 2, fp: 1, tn: 5 };
        let (p, r) = (bc.precision(), bc.recall());
        assert!((bc.f1() - 2.0 * p * r / (p + r)).abs() < 1e-12);
    }

    #[test]
    fn test_f1_is_harmonic_mean_of_exact_rates() {
        // P = 1/3, R = 1/7 -> F1 = 0.2
        let bc = BinaryConfusion { tp: 1, fn_: 6, fp: 2, tn: 1 };
        assert!((bc.f1() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_rounding_precision_is_configurable() {
        let (y_true, y_pred) = scenario();
        let cm = confusion_matrix(&y_true, &y_pred).unwrap();

        assert_eq!(MetricDeriver::new(&cm).with_decimal(2).accuracy().unwrap(), 0.83);
        assert_eq!(MetricDeriver::new(&cm).with_decimal(6).accuracy().unwrap(), 0.833333);
        assert_eq!(MetricDeriver::new(&cm).with_decimal(0).accuracy().unwrap(), 1.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.66666, 4), 0.6667);
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(round_to(0.125, 2), 0.13);
        assert!(round_to(f64::NAN, 4).is_nan());
    }

    #[test]
    fn test_round_to_beyond_f64_precision_keeps_value() {
        assert_eq!(round_to(0.123456, 16), 0.123456);
        assert_eq!(round_to(0.123456, 400), 0.123456);
        assert_eq!(round_to(0.123456, u32::MAX), 0.123456);
        assert_eq!(round_to(f64::MAX, 4), f64::MAX);
    }

    #[test]
    fn test_huge_decimal_reports_unrounded_metrics() {
        let (y_true, y_pred) = scenario();
        let eval = Evaluation::new(y_true, y_pred).unwrap().with_decimal(400);

        assert_eq!(eval.accuracy().unwrap(), 5.0 / 6.0);
        let recall = eval.recall();
        for (label, value) in recall.iter() {
            assert!(!value.is_nan(), "recall of {label}");
        }
        assert_eq!(recall.get(&"0"), Some(2.0 / 3.0));
        assert_eq!(recall.get(&"1"), Some(1.0));

        let cm = confusion_matrix(&["a", "a", "b", "b"], &["a", "b", "b", "a"]).unwrap();
        assert_eq!(MetricDeriver::new(&cm).with_decimal(u32::MAX).accuracy().unwrap(), 0.5);
    }

    #[test]
    fn test_report_reuses_binary_confusion() {
        let (y_true, y_pred) = scenario();
        let eval = Evaluation::new(y_true, y_pred).unwrap();
        let report = eval.report().unwrap();

        assert_eq!(report.accuracy, 0.8333);
        assert_eq!(report.decimal, 4);
        let labels: Vec<&str> = report.classes.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["0", "1", "2"]);

        let class1 = &report.classes[1];
        assert_eq!(class1.support, 1);
        assert_eq!(class1.confusion, BinaryConfusion { tp: 1, fn_: 0, fp: 1, tn: 4 });
        assert_eq!(class1.metrics.precision, 0.5);
        assert_eq!(class1.metrics.specificity, 0.8);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let eval = Evaluation::new(vec![0, 1], vec![0, 0]).unwrap();
        let report = eval.report().unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["accuracy"], 0.5);
        assert_eq!(json["classes"][1]["label"], 1);
        assert_eq!(json["classes"][1]["confusion"]["fn"], 1);
        assert_eq!(json["classes"][0]["metrics"]["specificity"], 0.0);
    }

    #[test]
    fn test_display() {
        let cm = confusion_matrix(&["cat", "dog"], &["dog", "dog"]).unwrap();
        let display = matrix_report(&cm);

        assert!(display.contains("Confusion Matrix"));
        assert!(display.contains("cat"));
        assert!(display.contains("dog"));
    }

    #[test]
    fn test_metrics_report_layout() {
        let (y_true, y_pred) = scenario();
        let eval = Evaluation::new(y_true, y_pred).unwrap();
        let text = metrics_report(&eval.report().unwrap());

        assert!(text.contains("recall"));
        assert!(text.contains("precision"));
        assert!(text.contains("specificity"));
        assert!(text.contains("f1-score"));
        assert!(text.contains("0.6667"));
        assert!(text.contains("Accuracy: 0.8333"));
    }

    #[test]
    fn test_classification_report() {
        let (y_true, y_pred) = scenario();
        let report = classification_report(y_true, y_pred).unwrap();

        assert!(report.contains("Confusion Matrix"));
        assert!(report.contains("Accuracy: 0.8333"));
    }

    #[test]
    fn test_accuracy_matches_equality_count() {
        let y_true = vec![0, 0, 1, 1, 2, 2, 0, 1, 2];
        let y_pred = vec![0, 1, 1, 2, 2, 0, 0, 1, 2];
        let cm = confusion_matrix(&y_true, &y_pred).unwrap();

        let correct = y_true.iter().zip(&y_pred).filter(|(t, p)| t == p).count();
        assert_eq!(cm.accuracy().unwrap(), correct as f64 / y_true.len() as f64);
    }
}
