//! Currency amount parsing and formatting.

/// Tolerance used when reconciling itemised payments against a declared total.
pub const PAYMENT_TOLERANCE: f64 = 0.01;

/// Parses an amount as typed into a form.
///
/// Accepts Indian digit grouping (`2,50,000`) and a leading rupee marker.
/// Returns `None` for empty, non-numeric or non-finite input.
#[must_use]
pub fn parse_amount(value: &str) -> Option<f64> {
    let mut cleaned = value.trim();
    for prefix in ["₹", "Rs.", "Rs", "rs.", "rs"] {
        if let Some(rest) = cleaned.strip_prefix(prefix) {
            cleaned = rest.trim_start();
            break;
        }
    }

    let digits: String = cleaned.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        return None;
    }

    digits.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

/// Whether an amount is typed with more precision than paise, e.g. `100.125`.
#[must_use]
pub fn exceeds_paise(value: &str) -> bool {
    value
        .trim()
        .split_once('.')
        .is_some_and(|(_, fraction)| fraction.chars().count() > 2)
}

/// Whether two amounts agree within [`PAYMENT_TOLERANCE`].
#[must_use]
pub fn amounts_match(a: f64, b: f64) -> bool {
    (a - b).abs() <= PAYMENT_TOLERANCE
}

/// Formats a computed amount as form input.
///
/// Whole rupees print without decimals, anything else with two.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

/// Formats an amount with Indian digit grouping and two decimals, e.g. `2,50,000.00`.
#[must_use]
pub fn format_indian_grouping(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, paise) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let grouped = if whole.len() <= 3 {
        whole.to_string()
    } else {
        let (head, last_three) = whole.split_at(whole.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (left, pair) = rest.split_at(rest.len() - 2);
            groups.push(pair);
            rest = left;
        }
        if !rest.is_empty() {
            groups.push(rest);
        }
        groups.reverse();
        format!("{},{last_three}", groups.join(","))
    };

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{paise}")
}
