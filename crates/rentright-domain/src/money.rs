//! Euro amount helpers shared by the classifier and the WWS calculator

/// Round an amount to whole cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format an amount as euros with exactly two fraction digits (`€249.80`).
pub fn format_euros(amount: f64) -> String {
    format!("€{:.2}", round_cents(amount))
}

/// Format an amount as whole euros with thousands separators (`€300,000`).
///
/// Negative amounts print as `€0` and amounts past `u64::MAX` saturate. The
/// WWS calculator rejects WOZ values that large before formatting them.
pub fn format_whole_euros(amount: f64) -> String {
    let whole = amount.round().clamp(0.0, u64::MAX as f64) as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("€{}", grouped)
}
