//! Thai-facing presentation helpers shared by the table views and the
//! exported report.

use rust_decimal::{Decimal, RoundingStrategy};
use time::Date;

/// Month names as the `th-TH` locale spells them.
pub const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Money: always two decimals, comma-grouped thousands, half rounded away
/// from zero. `27200` renders as `27,200.00`.
pub fn baht(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{rounded:.2}");
    let (sign, unsigned) = split_sign(&text);
    match unsigned.split_once('.') {
        Some((whole, fraction)) => format!("{sign}{}.{fraction}", group_thousands(whole)),
        None => format!("{sign}{}.00", group_thousands(unsigned)),
    }
}

/// Quantities: trailing zeros dropped, thousands grouped, fraction kept
/// only when there is one. `3.50` renders as `3.5`, `1000` as `1,000`.
pub fn quantity(value: Decimal) -> String {
    let text = value.normalize().to_string();
    let (sign, unsigned) = split_sign(&text);
    match unsigned.split_once('.') {
        Some((whole, fraction)) => format!("{sign}{}.{fraction}", group_thousands(whole)),
        None => format!("{sign}{}", group_thousands(unsigned)),
    }
}

/// Long Thai date with the Buddhist-era year, `-` when the date is unset.
/// `2026-10-01` renders as `1 ตุลาคม 2569`.
pub fn thai_date(date: Option<Date>) -> String {
    match date {
        Some(date) => format!(
            "{} {} {}",
            date.day(),
            THAI_MONTHS[date.month() as usize - 1],
            date.year() + 543
        ),
        None => "-".to_string(),
    }
}

fn split_sign(text: &str) -> (&str, &str) {
    match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
