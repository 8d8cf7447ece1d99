//! Number formatting for the terminal UI.

/// Whole numbers print without decimals, everything else with two.
pub fn fmt_count(n: f64) -> String {
    if (n - n.round()).abs() < 1e-9 {
        format!("{:.0}", n.round())
    } else {
        format!("{:.2}", n)
    }
}

/// `+50.00%  (x1.500)` for a 1.5 multiplier.
pub fn fmt_boost(multiplier: f64) -> String {
    format!(
        "+{:.2}%  (x{:.3})",
        (multiplier - 1.0) * 100.0,
        multiplier
    )
}
