use rust_decimal::Decimal;

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let formatted = format!("{:.2}", val.abs());
    let (int_part, dec_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    let sign = if val < Decimal::ZERO { "-" } else { "" };
    format!("{sign}${with_commas}.{dec_part}")
}

/// Truncate to `max` characters, the last one being "…" when cut.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max - 1).collect();
    format!("{truncated}…")
}

/// Largest valid first-visible index when `page` items fit on screen.
pub(crate) fn max_scroll(len: usize, page: usize) -> usize {
    len.saturating_sub(page.max(1))
}

pub(crate) fn scroll_down(scroll: &mut usize, len: usize, page: usize) {
    *scroll = (*scroll + 1).min(max_scroll(len, page));
}

pub(crate) fn scroll_up(scroll: &mut usize) {
    *scroll = scroll.saturating_sub(1);
}

pub(crate) fn scroll_to_bottom(scroll: &mut usize, len: usize, page: usize) {
    *scroll = max_scroll(len, page);
}
