//! Indian-numbering display helpers (K / L / Cr)

/// Rupees in one lakh
pub const LAKH: f64 = 1e5;

/// Rupees in one crore
pub const CRORE: f64 = 1e7;

/// Round to `decimals` places, ties towards +infinity.
/// Displayed figures use this rather than `f64::round` or `{:.N}`.
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor + 0.5).floor() / factor;
    // Avoid printing "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format a rupee amount as an abbreviated display string.
///
/// Thresholds are checked top-down and the first match wins:
/// crore (1 decimal), lakh (1 decimal), thousand (no decimals), then the
/// plain amount rounded to the nearest rupee. Negative amounts always fall
/// through to the plain branch.
pub fn format_currency_inr(value: f64) -> String {
    if value >= CRORE {
        format!("₹{:.1}Cr", round_half_up(value / CRORE, 1))
    } else if value >= LAKH {
        format!("₹{:.1}L", round_half_up(value / LAKH, 1))
    } else if value >= 1e3 {
        format!("₹{:.0}K", round_half_up(value / 1e3, 0))
    } else {
        format!("₹{:.0}", round_half_up(value, 0))
    }
}

/// Convert rupees to lakhs, rounded half-up to one decimal place
pub fn to_lakhs(rupees: f64) -> f64 {
    round_half_up(rupees / LAKH, 1)
}
