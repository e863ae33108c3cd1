use std::fs;

use notation::{
    Notation, NotationError, convert_infix_to_postfix, convert_postfix_to_infix,
    evaluate_infix_expression, evaluate_postfix_expression,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in extract_notation_lines(&content) {
            count += 1;
            if let Err(message) = run_example(&line) {
                panic!("Example in {path:?} failed:\n{line}\n{message}");
            }
        }
    }

    assert!(count > 0, "No notation examples found in book/src");
}

fn extract_notation_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```notation") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines
}

/// Runs one `<operation> <expression> => <expected>` example line.
fn run_example(line: &str) -> Result<(), String> {
    let (operation, rest) = line.split_once(' ').ok_or("missing operation")?;
    let (expression, expected) = rest.rsplit_once(" => ").ok_or("missing ' => '")?;

    let actual = match operation {
        "to-postfix" => convert_infix_to_postfix(expression),
        "to-infix" => convert_postfix_to_infix(expression),
        "eval-infix" => evaluate_infix_expression(expression).map(|v| v.to_string()),
        "eval-postfix" => evaluate_postfix_expression(expression).map(|v| v.to_string()),
        other => return Err(format!("unknown operation '{other}'")),
    };

    match (actual, expected) {
        (Err(_), "error") => Ok(()),
        (Ok(value), "error") => Err(format!("expected an error, got {value}")),
        (Err(e), _) => Err(format!("Error: {e}")),
        (Ok(value), expected) if operation.starts_with("eval") => {
            let value: f64 = value.parse().map_err(|e| format!("{e}"))?;
            let expected: f64 = expected.parse().map_err(|e| format!("{e}"))?;
            if value == expected || (value - expected).abs() < 1e-9 {
                Ok(())
            } else {
                Err(format!("expected {expected}, got {value}"))
            }
        },
        (Ok(value), expected) if value == expected => Ok(()),
        (Ok(value), expected) => Err(format!("expected '{expected}', got '{value}'")),
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}");
}

const SINGLE_DIGIT_EXPRESSIONS: &[&str] = &["2+3*4",
                                            "(2+3)*4",
                                            "9-4-2",
                                            "5-(3-1)",
                                            "7-2*3",
                                            "2*3+4*5",
                                            "1+2-3+4",
                                            "6/2*3",
                                            "8/4/2",
                                            "2^2*3",
                                            "2^3^2",
                                            "2*(3-1)^2",
                                            "{9-1}-[2+3]"];

#[test]
fn precedence_orders_multiplication_before_addition() {
    assert_eq!(convert_infix_to_postfix("2+3*4").unwrap(), "2 3 4 * +");
    assert_close(evaluate_infix_expression("2+3*4").unwrap(), 14.0);
}

#[test]
fn equal_precedence_groups_left_to_right() {
    assert_eq!(convert_infix_to_postfix("a-b+c").unwrap(), "a b - c +");
    assert_eq!(convert_infix_to_postfix("a/b*c").unwrap(), "a b / c *");
    assert_close(evaluate_infix_expression("2-3+4").unwrap(), 3.0);
    assert_close(evaluate_infix_expression("8/4/2").unwrap(), 1.0);
}

#[test]
fn exponents_are_always_pushed() {
    assert_eq!(convert_infix_to_postfix("2^3^2").unwrap(), "2 3 2 ^ ^");
    assert_close(evaluate_infix_expression("2^3^2").unwrap(), 512.0);
    assert_close(evaluate_infix_expression("(2^3)^2").unwrap(), 64.0);
    assert_close(evaluate_infix_expression("2^3*2").unwrap(), 16.0);
    assert_close(evaluate_infix_expression("2*3^2").unwrap(), 18.0);
}

#[test]
fn all_bracket_kinds_group() {
    assert_eq!(convert_infix_to_postfix("[(1+2)*{3+4}]^2").unwrap(),
               "1 2 + 3 4 + * 2 ^");
    assert_close(evaluate_infix_expression("[(1+2)*{3+4}]^2").unwrap(), 441.0);
}

#[test]
fn literals_keep_their_text() {
    assert_eq!(convert_infix_to_postfix("3.50*2").unwrap(), "3.50 2 *");
    assert_eq!(convert_postfix_to_infix("3.50 .5 +").unwrap(), "(3.50 + .5)");
    assert_eq!(convert_infix_to_postfix("  12   +   345 ").unwrap(), "12 345 +");
}

#[test]
fn decimal_literals_evaluate() {
    assert_close(evaluate_infix_expression("0.5+.25").unwrap(), 0.75);
    assert_close(evaluate_infix_expression("7.*2").unwrap(), 14.0);
    assert_close(evaluate_postfix_expression("1.5 2.5 *").unwrap(), 3.75);
}

#[test]
fn postfix_operands_keep_reading_order() {
    assert_close(evaluate_postfix_expression("8 2 -").unwrap(), 6.0);
    assert_close(evaluate_postfix_expression("8 2 /").unwrap(), 4.0);
    assert_close(evaluate_postfix_expression("2 3 ^").unwrap(), 8.0);
    assert_close(evaluate_infix_expression("8-2").unwrap(), 6.0);
    assert_close(evaluate_infix_expression("8/2").unwrap(), 4.0);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(evaluate_infix_expression("2/0").unwrap(), f64::INFINITY);
    assert_eq!(evaluate_postfix_expression("0 2 - 0 /").unwrap(), f64::NEG_INFINITY);
    assert!(evaluate_infix_expression("0/0").unwrap().is_nan());
}

#[test]
fn postfix_to_infix_parenthesises_sums_only() {
    assert_eq!(convert_postfix_to_infix("2 3 4 * +").unwrap(), "(2 + 3 * 4)");
    assert_eq!(convert_postfix_to_infix("2 3 + 4 *").unwrap(), "(2 + 3) * 4");
    assert_eq!(convert_postfix_to_infix("a b c - -").unwrap(), "(a - (b - c))");
    assert_eq!(convert_postfix_to_infix("2 3 2 ^ ^").unwrap(), "2 ^ 3 ^ 2");
}

#[test]
fn round_trip_preserves_value() {
    for &expression in SINGLE_DIGIT_EXPRESSIONS {
        let postfix = convert_infix_to_postfix(expression).unwrap();
        let infix = convert_postfix_to_infix(&postfix).unwrap();

        assert_close(evaluate_infix_expression(&infix).unwrap(),
                     evaluate_infix_expression(expression).unwrap());
    }
}

#[test]
fn infix_and_postfix_evaluation_agree() {
    let extra = ["8/(4/2)", "(2^3)^2", "{4+4}/[2*2]", "1.5*(2-0.5)^2"];

    for expression in SINGLE_DIGIT_EXPRESSIONS.iter().copied().chain(extra) {
        let postfix = convert_infix_to_postfix(expression).unwrap();

        assert_close(evaluate_postfix_expression(&postfix).unwrap(),
                     evaluate_infix_expression(expression).unwrap());
    }
}

// Bare `*`, `/` and `^` in postfix-to-infix output lose right-nested
// grouping. These pin the current output rather than a corrected one.
#[test]
fn unparenthesised_products_lose_right_grouping() {
    let postfix = convert_infix_to_postfix("8/(4/2)").unwrap();
    assert_eq!(postfix, "8 4 2 / /");

    let infix = convert_postfix_to_infix(&postfix).unwrap();
    assert_eq!(infix, "8 / 4 / 2");
    assert_close(evaluate_postfix_expression(&postfix).unwrap(), 4.0);
    assert_close(evaluate_infix_expression(&infix).unwrap(), 1.0);

    assert_eq!(convert_postfix_to_infix("2 3 ^ 2 ^").unwrap(), "2 ^ 3 ^ 2");
    assert_eq!(convert_postfix_to_infix("4 4 + 2 2 * /").unwrap(), "(4 + 4) / 2 * 2");
}

#[test]
fn sequential_operators_are_rejected() {
    assert_eq!(convert_infix_to_postfix("5++4"),
               Err(NotationError::SequentialOperators { previous: '+',
                                                        next:     '+',
                                                        offset:   2, }));
    assert_eq!(evaluate_infix_expression("(5+)"),
               Err(NotationError::SequentialOperators { previous: '+',
                                                        next:     ')',
                                                        offset:   3, }));
    assert!(matches!(convert_infix_to_postfix("2*()"),
                     Err(NotationError::SequentialOperators { .. })));
}

#[test]
fn unbalanced_brackets_are_rejected() {
    assert_eq!(evaluate_infix_expression("(2+3"),
               Err(NotationError::UnbalancedDelimiters { bracket: '(', offset: 0 }));
    assert_eq!(convert_infix_to_postfix("(2+3]"),
               Err(NotationError::UnbalancedDelimiters { bracket: ']', offset: 4 }));
    assert_eq!(evaluate_infix_expression("2+3)"),
               Err(NotationError::UnbalancedDelimiters { bracket: ')', offset: 3 }));
}

#[test]
fn residual_operands_are_rejected() {
    assert_eq!(evaluate_postfix_expression("2 3"),
               Err(NotationError::ResidualOperands { count: 2 }));
    assert_eq!(convert_postfix_to_infix("1 2 3 +"),
               Err(NotationError::ResidualOperands { count: 2 }));
    assert_eq!(evaluate_infix_expression("2 3"),
               Err(NotationError::ResidualOperands { count: 2 }));
    assert_eq!(convert_infix_to_postfix("(2)(3)"),
               Err(NotationError::ResidualOperands { count: 2 }));
}

#[test]
fn missing_operands_are_rejected() {
    assert_eq!(evaluate_postfix_expression("2 +"), Err(NotationError::StackUnderflow));
    assert_eq!(convert_postfix_to_infix("+"), Err(NotationError::StackUnderflow));
    assert_eq!(evaluate_infix_expression("2+3+"), Err(NotationError::StackUnderflow));
    assert_eq!(convert_infix_to_postfix("*2"), Err(NotationError::StackUnderflow));
}

#[test]
fn malformed_numbers_are_rejected() {
    assert_eq!(convert_infix_to_postfix("1.2.3+4"),
               Err(NotationError::MalformedNumber { literal: "1.2.3".to_string(),
                                                    offset:  0, }));
    assert_eq!(evaluate_postfix_expression("2 . +"),
               Err(NotationError::MalformedNumber { literal: ".".to_string(),
                                                    offset:  2, }));
}

#[test]
fn invalid_characters_are_rejected() {
    assert_eq!(convert_infix_to_postfix("2 # 3"),
               Err(NotationError::InvalidCharacter { character: '#', offset: 2 }));
    assert_eq!(evaluate_postfix_expression("(2 3 +)"),
               Err(NotationError::InvalidCharacter { character: '(', offset: 0 }));
    assert_eq!(convert_postfix_to_infix("2 3 %"),
               Err(NotationError::InvalidCharacter { character: '%', offset: 4 }));
}

#[test]
fn blank_input_is_rejected_everywhere() {
    assert_eq!(convert_infix_to_postfix(""), Err(NotationError::EmptyExpression));
    assert_eq!(convert_postfix_to_infix("   "), Err(NotationError::EmptyExpression));
    assert_eq!(evaluate_infix_expression("\t"), Err(NotationError::EmptyExpression));
    assert_eq!(evaluate_postfix_expression(""), Err(NotationError::EmptyExpression));
}

#[test]
fn variables_convert_freely_but_evaluate_only_when_bound() {
    assert_eq!(convert_infix_to_postfix("x*(y+z)").unwrap(), "x y z + *");
    assert_eq!(convert_postfix_to_infix("a b c * +").unwrap(), "(a + b * c)");
    assert_eq!(evaluate_infix_expression("x+1"),
               Err(NotationError::UnboundVariable { name: 'x' }));

    let notation = Notation::new().bind('x', 3.0).bind('y', 0.5);
    assert_close(notation.evaluate_infix_expression("x^2 - y").unwrap(), 8.5);
    assert_close(notation.evaluate_postfix_expression("x y /").unwrap(), 6.0);
}

#[test]
fn stack_limit_bounds_pending_items() {
    let bounded = Notation::new().with_stack_limit(2);

    assert_eq!(bounded.evaluate_postfix_expression("1 2 3 + +"),
               Err(NotationError::StackOverflow { limit: 2 }));
    assert_close(bounded.evaluate_postfix_expression("1 2 + 3 +").unwrap(), 6.0);
    assert_eq!(bounded.convert_infix_to_postfix("((1+2))"),
               Err(NotationError::StackOverflow { limit: 2 }));

    let roomy = Notation::new().with_stack_limit(3);
    assert_close(roomy.evaluate_postfix_expression("1 2 3 + +").unwrap(), 6.0);
}

#[test]
fn errors_describe_the_problem() {
    let message = evaluate_postfix_expression("2 3").unwrap_err().to_string();
    assert!(message.contains("2 values remain"), "{message}");

    let message = convert_infix_to_postfix("5++4").unwrap_err().to_string();
    assert!(message.contains("'+' may not follow '+'"), "{message}");
}
