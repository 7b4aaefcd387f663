//! Tariff table and currency formatting.

/// One row of the age-banded tariff: customers aged `min..=max` pay
/// `factor` times the base price.
struct AgeBand {
    min: u8,
    max: u8,
    factor: f64,
}

/// The rental desk's tariff. Drivers outside every band cannot be quoted.
const AGE_BANDS: &[AgeBand] = &[
    AgeBand {
        min: 18,
        max: 25,
        factor: 1.1,
    },
    AgeBand {
        min: 26,
        max: 30,
        factor: 1.5,
    },
    AgeBand {
        min: 31,
        max: 100,
        factor: 1.3,
    },
];

/// The price multiplier for a customer of the given age, or `None` when the
/// age falls outside every tariff band.
pub fn age_factor(age: u8) -> Option<f64> {
    AGE_BANDS
        .iter()
        .find(|band| band.min <= age && age <= band.max)
        .map(|band| band.factor)
}

/// Formats an amount as Brazilian Real with two decimal places, e.g.
/// `R$ 1.234,56`. Rounds to the nearest centavo.
pub fn format_brl(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();

    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{sign}R$ {grouped},{:02}", cents % 100)
}
