use common::{FieldMeta, Value};
use pretty_assertions::assert_eq;
use render::format_cell;

#[test]
fn percent_cells() {
    let meta = FieldMeta::pretty("% Nat 20s").percent();

    assert_eq!("12.5%", format_cell(Some(&Value::Number(0.125)), Some(&meta)));
    assert_eq!("20.0%", format_cell(Some(&Value::Number(0.2)), Some(&meta)));
    assert_eq!("5.0%", format_cell(Some(&Value::Number(0.05)), Some(&meta)));
    assert_eq!("100.0%", format_cell(Some(&Value::Number(1.0)), Some(&meta)));
}

#[test]
fn roll_average_cells() {
    let meta = FieldMeta::pretty("Avg. Stealth").roll_average();

    assert_eq!("10.5", format_cell(Some(&Value::Number(10.4567)), Some(&meta)));
    assert_eq!("3.0", format_cell(Some(&Value::Number(3.0)), Some(&meta)));
}

#[test]
fn percent_wins_over_roll_average() {
    let meta = FieldMeta::default().percent().roll_average();

    assert_eq!("50.0%", format_cell(Some(&Value::Number(0.5)), Some(&meta)));
}

#[test]
fn passthrough() {
    assert_eq!("42", format_cell(Some(&Value::Number(42.0)), None));
    assert_eq!("0.3333", format_cell(Some(&Value::Number(0.3333)), None));
    assert_eq!("Amy", format_cell(Some(&Value::Text("Amy".to_owned())), None));
    assert_eq!("true", format_cell(Some(&Value::Flag(true)), None));
    assert_eq!("1e+21", format_cell(Some(&Value::Number(1e21)), None));
    assert_eq!("1e-7", format_cell(Some(&Value::Number(1e-7)), None));

    // text stays text even under a numeric flag
    let meta = FieldMeta::default().percent();
    assert_eq!("n/a", format_cell(Some(&Value::Text("n/a".to_owned())), Some(&meta)));
}

#[test]
fn missing_values_render_empty() {
    let meta = FieldMeta::default().percent();

    assert_eq!("", format_cell(None, Some(&meta)));
    assert_eq!("", format_cell(Some(&Value::Null), Some(&meta)));
}

#[test]
fn percent_text_parses_back() {
    let meta = FieldMeta::default().percent();

    for ratio in [0.0, 0.001, 0.0449, 0.05, 0.125, 0.33333, 0.666, 0.999, 1.0] {
        let text = format_cell(Some(&Value::Number(ratio)), Some(&meta));
        let parsed: f64 = text.strip_suffix('%').unwrap().parse().unwrap();
        let expected = (ratio * 1000.0).round() / 10.0;

        assert!(
            (parsed - expected).abs() < 1e-9,
            "{} rendered as {}",
            ratio,
            text
        );
    }
}
