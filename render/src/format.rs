use common::{FieldMeta, Value};

/// Display text of a single cell.
///
/// Percent columns win over roll averages when a column carries both flags.
/// Anything that is not a number is shown in its plain form, and a missing
/// value renders as an empty string.
pub fn format_cell(value: Option<&Value>, meta: Option<&FieldMeta>) -> String {
    let value = match value {
        Some(v) => v,
        None => return String::new(),
    };

    match (value, meta) {
        (Value::Number(n), Some(meta)) if meta.is_percent => percent(*n),
        (Value::Number(n), Some(meta)) if meta.is_roll_average => one_decimal(*n),
        (other, _) => other.to_string(),
    }
}

pub fn percent(ratio: f64) -> String {
    format!("{}%", one_decimal(ratio * 100.0))
}

/// Exactly one fractional digit, rounding half away from zero, with `,`
/// separating thousands.
pub fn one_decimal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }

    let tenths = (value * 10.0).round();
    let sign = if tenths < 0.0 { "-" } else { "" };
    let tenths = tenths.abs();
    let whole = (tenths / 10.0).trunc();
    let fraction = (tenths - whole * 10.0) as u8;

    format!("{}{}.{}", sign, group_thousands(&format!("{:.0}", whole)), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
