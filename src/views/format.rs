const GROUP_SEPARATOR: char = '\u{a0}';

/// Formats a forint amount the Hungarian way: `75000` becomes `"75 000 Ft"`
/// (non-breaking space). Four-digit amounts are left ungrouped.
pub fn format_ft(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() < 5 {
        return format!("{digits} Ft");
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out.push_str(" Ft");
    out
}

/// Escapes text for element content. Quotes are left alone, so callers
/// must not place the result inside attribute values; use
/// [`escape_attr`] there.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_attr(text: &str) -> String {
    escape_html(text).replace('"', "&quot;")
}
