//! Amount in words, French, dinars and centimes.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const UNITS: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix",
    "onze", "douze", "treize", "quatorze", "quinze", "seize",
];

const TENS: [&str; 7] = ["", "dix", "vingt", "trente", "quarante", "cinquante", "soixante"];

const MILLION: u64 = 1_000_000;
const MILLIARD: u64 = 1_000_000_000;
const LIMIT: u64 = 1_000_000_000_000;

/// Spells out an amount as `<n> dinar[s] et <c> centime[s]`.
///
/// "dinar" takes the plural for every integer part except exactly one, zero
/// included. Anything that cannot be converted (not a number, negative, too
/// large) is returned as given.
pub fn amount_in_words(amount: &str) -> String {
    convert(amount.trim()).unwrap_or_else(|| {
        tracing::debug!(amount, "amount could not be spelled out, using raw value");
        amount.to_string()
    })
}

fn convert(amount: &str) -> Option<String> {
    let value = Decimal::from_str(amount).ok()?;
    if value.is_sign_negative() && !value.is_zero() {
        return None;
    }

    let integer_part = value.trunc();
    let dinars = integer_part.to_u64()?;
    let centimes = ((value - integer_part) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_u64()?;

    let mut words = integer_to_french(dinars)?;
    words.push_str(" dinar");
    if dinars != 1 {
        words.push('s');
    }

    if centimes > 0 {
        words.push_str(" et ");
        words.push_str(&integer_to_french(centimes)?);
        words.push_str(" centime");
        if centimes > 1 {
            words.push('s');
        }
    }

    Some(words)
}

/// Cardinal number in French, traditional spelling. `None` from one trillion up.
pub fn integer_to_french(n: u64) -> Option<String> {
    if n == 0 {
        return Some(UNITS[0].to_string());
    }
    if n >= LIMIT {
        return None;
    }

    let milliards = n / MILLIARD;
    let millions = (n / MILLION) % 1000;
    let thousands = (n / 1000) % 1000;
    let rest = n % 1000;

    let mut parts = Vec::new();
    match milliards {
        0 => {}
        1 => parts.push("un milliard".to_string()),
        m => parts.push(format!("{} milliards", below_thousand(m, true))),
    }
    match millions {
        0 => {}
        1 => parts.push("un million".to_string()),
        m => parts.push(format!("{} millions", below_thousand(m, true))),
    }
    match thousands {
        0 => {}
        1 => parts.push("mille".to_string()),
        t => parts.push(format!("{} mille", below_thousand(t, false))),
    }
    if rest > 0 {
        parts.push(below_thousand(rest, true));
    }

    Some(parts.join(" "))
}

/// `plural` is false when the group multiplies "mille": "cents" and
/// "quatre-vingts" lose their s there.
fn below_thousand(n: u64, plural: bool) -> String {
    let hundreds = n / 100;
    let rest = n % 100;

    let mut words = match hundreds {
        0 => String::new(),
        1 => "cent".to_string(),
        h => {
            let mut w = format!("{} cent", UNITS[h as usize]);
            if rest == 0 && plural {
                w.push('s');
            }
            w
        }
    };

    if rest > 0 {
        if !words.is_empty() {
            words.push(' ');
        }
        words.push_str(&below_hundred(rest, plural));
    }
    words
}

fn below_hundred(n: u64, plural: bool) -> String {
    match n {
        0..=16 => UNITS[n as usize].to_string(),
        17..=19 => format!("dix-{}", UNITS[(n - 10) as usize]),
        20..=69 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                1 => format!("{} et un", tens),
                u => format!("{}-{}", tens, UNITS[u as usize]),
            }
        }
        70..=79 => match n - 60 {
            11 => "soixante et onze".to_string(),
            r => format!("soixante-{}", below_hundred(r, plural)),
        },
        80 if plural => "quatre-vingts".to_string(),
        80 => "quatre-vingt".to_string(),
        _ => format!("quatre-vingt-{}", below_hundred(n - 80, plural)),
    }
}
