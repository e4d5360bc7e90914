//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use scicalc::core::number::{format_number, parse_operand};
use scicalc::core::{evaluate, BinaryOperator};
use scicalc::{Calculator, ERROR_DISPLAY};

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> BinaryOperator {
        match variant {
            0 => BinaryOperator::Add,
            1 => BinaryOperator::Subtract,
            2 => BinaryOperator::Multiply,
            _ => BinaryOperator::Divide,
        }
    }
}

prop_compose! {
    fn arbitrary_operand()(value in 0u32..1000) -> u32 {
        value
    }
}

fn type_digits(calc: &mut Calculator, value: u32) {
    for ch in value.to_string().chars() {
        let digit = ch.to_digit(10).unwrap() as u8;
        calc.input_digit(digit).unwrap();
    }
}

proptest! {
    #[test]
    fn chained_operators_evaluate_left_to_right(
        first in arbitrary_operand(),
        steps in prop::collection::vec((arbitrary_operator(), arbitrary_operand()), 1..6)
    ) {
        let mut calc = Calculator::new();
        type_digits(&mut calc, first);

        let mut expected = first as f64;
        for (op, operand) in &steps {
            calc.apply_binary_operator(*op);
            type_digits(&mut calc, *operand);
            expected = evaluate(expected, *operand as f64, *op);
        }
        calc.apply_equals();

        if expected.is_finite() {
            let shown = parse_operand(calc.display()).unwrap();
            prop_assert!(
                shown == expected || (shown - expected).abs() <= expected.abs() * 1e-12,
                "shown {} expected {}", shown, expected
            );
        } else {
            prop_assert_eq!(calc.display(), ERROR_DISPLAY);
        }
    }

    #[test]
    fn history_never_exceeds_capacity(count in 0usize..30) {
        let mut calc = Calculator::new();
        for n in 0..count {
            type_digits(&mut calc, n as u32 + 1);
            calc.apply_binary_operator(BinaryOperator::Add);
            type_digits(&mut calc, 1);
            calc.apply_equals();
        }

        prop_assert_eq!(calc.history().len(), count.min(10));
        if count > 0 {
            let latest = calc.history().latest().unwrap();
            prop_assert_eq!(latest.first_operand, count as f64);
        }
    }

    #[test]
    fn operand_holds_at_most_one_decimal_point(presses in prop::collection::vec(0u8..11, 1..20)) {
        let mut calc = Calculator::new();
        for press in presses {
            if press == 10 {
                calc.input_decimal_point();
            } else {
                calc.input_digit(press).unwrap();
            }
        }

        let points = calc.current_operand().matches('.').count();
        prop_assert!(points <= 1);
    }

    #[test]
    fn formatted_numbers_parse_back(value in -1e12f64..1e12) {
        let text = format_number(value);
        prop_assert!(text.contains('.'));
        prop_assert_eq!(parse_operand(&text).unwrap(), value);
    }

    #[test]
    fn all_clear_resets_everything_but_history(
        first in arbitrary_operand(),
        op in arbitrary_operator(),
        second in arbitrary_operand()
    ) {
        let mut calc = Calculator::new();
        type_digits(&mut calc, first);
        calc.apply_binary_operator(op);
        type_digits(&mut calc, second);
        calc.apply_equals();
        type_digits(&mut calc, first);
        calc.apply_binary_operator(op);

        calc.clear_all();

        prop_assert_eq!(calc.display(), "0");
        prop_assert_eq!(calc.pending_operator(), None);
        prop_assert_eq!(calc.first_operand(), 0.0);
        prop_assert_eq!(calc.expression_preview(), "");
        prop_assert_eq!(calc.history().len(), 1);
    }
}
