//! Amount formatting shared by every front end.

/// Two fraction digits with comma thousands grouping, e.g. `1,950.00`.
pub fn format_money(amount: f64) -> String {
    let rounded = format!("{:.2}", amount.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = amount < 0.0 && rounded.chars().any(|ch| ch != '0' && ch != '.');
    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, fraction)
}

/// One fraction digit, e.g. `42.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}
