use example_display::{
    format_signed, render_product, render_square, render_sum, render_sum_with, ExpressionLine,
    WorkedExample,
};

// ============================================================================
// Sign Formatting Tests
// ============================================================================

#[test]
fn test_non_negative_gets_plus() {
    for n in [0i64, 1, 9, 10, 99, 1234] {
        assert_eq!(format_signed(n), format!("+{n}"));
    }
}

#[test]
fn test_negative_keeps_natural_sign() {
    for n in [-1i64, -9, -10, -99, -1234] {
        let formatted = format_signed(n);
        assert_eq!(formatted, n.to_string());
        assert!(!formatted.starts_with("+-"));
        assert!(!formatted.starts_with("--"));
    }
}

// ============================================================================
// Sum Renderer Tests
// ============================================================================

#[test]
fn test_sum_expression_text() {
    let line = ExpressionLine::sum(&[5, -3, 2], 4).unwrap();
    assert_eq!(line.expression, "+5-3+2");
    assert_eq!(line.result, "4");
}

#[test]
fn test_sum_markup() {
    assert_eq!(
        render_sum(&[5, -3, 2], 4),
        concat!(
            "<div class=\"simple-expression\">\n",
            "    <div class=\"expression-line\">\n",
            "        <span class=\"expression\">+5-3+2</span>\n",
            "        <span class=\"equals\">=</span>\n",
            "        <span class=\"result\">4</span>\n",
            "    </div>\n",
            "</div>\n",
        )
    );
}

#[test]
fn test_sum_leading_negative() {
    let line = ExpressionLine::sum(&[-12, 30, -7], 11).unwrap();
    assert_eq!(line.expression, "-12+30-7");
}

#[test]
fn test_sum_result_is_not_checked() {
    // The caller's result is trusted even when it is wrong
    let line = ExpressionLine::sum(&[1, 1], 3).unwrap();
    assert_eq!(line.result, "3");
}

#[test]
fn test_sum_empty_renders_placeholder() {
    let markup = render_sum::<i32, i32>(&[], 0);
    assert_eq!(markup, "<p>Данные о числах недоступны</p>");
    assert!(!markup.contains("expression-line"));
}

#[test]
fn test_sum_empty_custom_placeholder() {
    let markup = render_sum_with::<i32, i32>(&[], 0, "No numbers <yet>");
    assert_eq!(markup, "<p>No numbers &lt;yet&gt;</p>");
}

#[test]
fn test_sum_floats() {
    let line = ExpressionLine::sum(&[1.5, -0.5, -0.0], 1.0).unwrap();
    assert_eq!(line.expression, "+1.5-0.5+0");
    assert_eq!(line.result, "1");
}

// ============================================================================
// Product and Square Renderer Tests
// ============================================================================

#[test]
fn test_product() {
    let line = ExpressionLine::product(6, 7, 42);
    assert_eq!(line.expression, "6 × 7");
    assert_eq!(line.result, "42");
    assert!(render_product(6, 7, 42).contains(r#"<span class="expression">6 × 7</span>"#));
}

#[test]
fn test_product_negative_factor() {
    let line = ExpressionLine::product(-4, 5, -20);
    assert_eq!(line.expression, "-4 × 5");
    assert_eq!(line.result, "-20");
}

#[test]
fn test_square() {
    let line = ExpressionLine::square(9, 81);
    assert_eq!(line.expression, "9²");
    assert_eq!(line.result, "81");
    let markup = render_square(9, 81);
    assert!(markup.contains(r#"<span class="expression">9²</span>"#));
    assert!(markup.contains(r#"<span class="result">81</span>"#));
}

#[test]
fn test_renderers_are_pure() {
    let numbers = vec![5, -3, 2];
    let first = render_sum(&numbers, 4);
    let second = render_sum(&numbers, 4);
    assert_eq!(first, second);
    assert_eq!(numbers, vec![5, -3, 2]);
    assert_eq!(render_square(12, 144), render_square(12, 144));
}

// ============================================================================
// WorkedExample Tests
// ============================================================================

#[test]
fn test_worked_example_matches_renderers() {
    assert_eq!(
        WorkedExample::sum(vec![5, -3, 2], 4).render(),
        render_sum(&[5, -3, 2], 4)
    );
    assert_eq!(WorkedExample::product(6, 7, 42).render(), render_product(6, 7, 42));
    assert_eq!(WorkedExample::square(9, 81).render(), render_square(9, 81));
}

#[test]
fn test_worked_example_computed_results() {
    assert_eq!(
        WorkedExample::sum_of(vec![5i64, -3, 2]),
        WorkedExample::sum(vec![5, -3, 2], 4)
    );
    assert_eq!(WorkedExample::product_of(6i64, 7), WorkedExample::product(6, 7, 42));
    assert_eq!(WorkedExample::square_of(-9i64), WorkedExample::square(-9, 81));
}

#[test]
fn test_worked_example_empty_sum() {
    let example: WorkedExample<i64> = WorkedExample::sum_of(Vec::new());
    assert_eq!(example.render_with("n/a"), "<p>n/a</p>");
}
