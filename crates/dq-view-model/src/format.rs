//! Number Formatting
//!
//! Display rules shared by the summary cards, tooltips and the drill-down panel.

/// Placeholder for a value the backend did not send
pub const MISSING: &str = "--";

/// Compact count: `1.2M`, `3.4K`, otherwise the grouped number.
pub fn format_number(value: Option<f64>) -> String {
    let Some(num) = value.filter(|n| n.is_finite()) else {
        return MISSING.to_string();
    };
    if num >= 1_000_000.0 {
        return format!("{:.1}M", num / 1_000_000.0);
    }
    if num >= 1_000.0 {
        return format!("{:.1}K", num / 1_000.0);
    }
    format_grouped(num)
}

/// Rate already expressed as a percentage, printed as sent (`4.2%`)
pub fn format_percent(rate: Option<f64>) -> String {
    match rate.filter(|r| r.is_finite()) {
        Some(r) => format!("{}%", r),
        None => MISSING.to_string(),
    }
}

/// Rate given as a fraction, scaled to a one-decimal percentage (`0.034` -> `3.4%`)
pub fn format_fraction(rate: Option<f64>) -> String {
    match rate.filter(|r| r.is_finite()) {
        Some(r) => format!("{:.1}%", r * 100.0),
        None => MISSING.to_string(),
    }
}

/// Share of anomalies already verified as fixed, in `[0, 100]`.
pub fn fix_rate(verified: Option<f64>, total: Option<f64>) -> f64 {
    match (verified, total) {
        (Some(v), Some(t)) if t > 0.0 && v.is_finite() && t.is_finite() => {
            (v / t * 100.0).clamp(0.0, 100.0)
        }
        _ => 0.0,
    }
}

/// en-US style number: thousands separators, at most three fraction digits.
fn format_grouped(num: f64) -> String {
    let negative = num < 0.0;
    let rounded = format!("{:.3}", num.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((&rounded, ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millions_and_thousands() {
        assert_eq!(format_number(Some(1_000_000.0)), "1.0M");
        assert_eq!(format_number(Some(2_450_000.0)), "2.5M");
        assert_eq!(format_number(Some(1_000.0)), "1.0K");
        assert_eq!(format_number(Some(15_320.0)), "15.3K");
        assert_eq!(format_number(Some(999_999.0)), "1000.0K");
    }

    #[test]
    fn test_small_numbers_use_locale_format() {
        assert_eq!(format_number(Some(0.0)), "0");
        assert_eq!(format_number(Some(999.0)), "999");
        assert_eq!(format_number(Some(12.5)), "12.5");
        assert_eq!(format_number(Some(-4_500.0)), "-4,500");
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(format_number(None), "--");
        assert_eq!(format_number(Some(f64::NAN)), "--");
        assert_eq!(format_percent(None), "--");
        assert_eq!(format_fraction(None), "--");
    }

    #[test]
    fn test_percentages() {
        assert_eq!(format_percent(Some(4.2)), "4.2%");
        assert_eq!(format_percent(Some(12.0)), "12%");
        assert_eq!(format_fraction(Some(0.034)), "3.4%");
    }

    #[test]
    fn test_fix_rate_is_undefined_safe() {
        assert_eq!(fix_rate(Some(25.0), Some(100.0)), 25.0);
        assert_eq!(fix_rate(Some(5.0), Some(0.0)), 0.0);
        assert_eq!(fix_rate(None, Some(10.0)), 0.0);
        assert_eq!(fix_rate(Some(10.0), None), 0.0);
        assert_eq!(fix_rate(Some(300.0), Some(100.0)), 100.0);
    }
}
