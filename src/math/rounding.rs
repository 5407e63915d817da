//! Day and currency rounding.
//!
//! Durations are whole days rounded up; money is whole rupees. Both helpers
//! are shared by the engine, the terminal report and the exports so every
//! surface shows the same numbers.

/// Slack applied before rounding up, so float noise like `206.99999999999997`
/// or `216.00000000000003` lands on the intended whole day.
const DAY_EPSILON: f64 = 1e-6;

/// Round a day count up to a whole day (non-finite or negative → 0).
pub fn ceil_days(days: f64) -> u32 {
    if !days.is_finite() || days <= 0.0 {
        return 0;
    }
    let rounded = (days - DAY_EPSILON).ceil().max(0.0);
    if rounded >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        rounded as u32
    }
}

/// Round a day count to the nearest whole day (non-finite or negative → 0).
pub fn round_days(days: f64) -> u32 {
    if !days.is_finite() || days <= 0.0 {
        return 0;
    }
    let rounded = days.round();
    if rounded >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        rounded as u32
    }
}

/// Round a monetary amount to whole currency units.
pub fn round_currency(amount: f64) -> f64 {
    amount.round()
}

/// Format an amount with Indian digit grouping, e.g. `36,00,000`.
pub fn format_inr(amount: f64) -> String {
    let rounded = round_currency(amount);
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, last3) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        if end > 0 {
            groups.push(&head[..end]);
        }
        groups.reverse();
        format!("{},{last3}", groups.join(","))
    };

    if negative { format!("-₹{grouped}") } else { format!("₹{grouped}") }
}
