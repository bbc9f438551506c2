use chrono::NaiveDate;
use minijinja::Value;

/// `{{ amount|currency }}`: thousands separators and two decimals.
pub fn currency_filter(value: Value) -> Value {
    if value.is_none() || value.is_undefined() {
        return Value::from("0.00");
    }

    let amount = match value.as_str() {
        Some(s) => s.trim().parse::<f64>().ok(),
        None => f64::try_from(value.clone()).ok(),
    };

    match amount {
        Some(amount) if amount.is_finite() => Value::from(format_currency(amount)),
        _ => value,
    }
}

/// `{{ date|date }}`: ISO dates become DD/MM/YYYY, anything else is kept
/// (and still escaped on output).
pub fn date_filter(value: Value) -> Value {
    match value.as_str().and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()) {
        Some(date) => Value::from_safe_string(date.format("%d/%m/%Y").to_string()),
        None => value,
    }
}

/// `{{ qty|quantity }}`: whole quantities print without a decimal part
/// (`10`, not `10.0`); fractional ones are kept as given.
pub fn quantity_filter(value: Value) -> Value {
    match f64::try_from(value.clone()) {
        Ok(qty) if qty.is_finite() && qty.fract() == 0.0 && qty.abs() < 1e15 => {
            Value::from(qty as i64)
        }
        _ => value,
    }
}

pub fn format_currency(amount: f64) -> String {
    let formatted = format_number_with_separators(amount.abs(), 2);
    if amount < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

pub fn format_number_with_separators(num: f64, decimals: usize) -> String {
    let formatted = format!("{:.decimals$}", num, decimals = decimals);
    let (integer, decimal) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    for (count, c) in integer.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let integer_formatted: String = result.chars().rev().collect();

    match decimal {
        Some(decimal) => format!("{}.{}", integer_formatted, decimal),
        None => integer_formatted,
    }
}
