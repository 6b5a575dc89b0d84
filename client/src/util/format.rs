//! Text formatting for table cells.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM` (UTC).
///
/// Date-only values pass through; anything else becomes `N/A`.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim) else {
        return "N/A".to_owned();
    };
    if !raw.get(..10).is_some_and(is_date) {
        return "N/A".to_owned();
    }
    if raw.len() == 10 {
        return raw.to_owned();
    }
    match raw.get(10..16) {
        Some(time) if is_time_suffix(time) => format!("{} {}", &raw[..10], &time[1..]),
        _ => "N/A".to_owned(),
    }
}

fn is_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter().enumerate().all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

// `THH:MM` or ` HH:MM`
fn is_time_suffix(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 6
        && (b[0] == b'T' || b[0] == b' ')
        && b[3] == b':'
        && [1, 2, 4, 5].iter().all(|&i| b[i].is_ascii_digit())
}

/// Integer with thousands separators, e.g. `12,500`.
pub fn format_points(points: i64) -> String {
    let digits = points.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if points < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Dollar amount with two decimals, e.g. `$12.50`.
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Uppercase the first character, e.g. `paypal` -> `Paypal`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
