use chrono::{Local, NaiveDate};

/// Truncate to `max_chars`, respecting UTF-8 character boundaries.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Collapse newlines and repeated whitespace into single spaces, then
/// truncate. Used for free-text cells (biographies, summaries, transcripts).
pub fn clean_inline(s: &str, max_chars: usize) -> String {
    let normalized = s
        .replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    truncate(&normalized, max_chars)
}

/// Relative age of a session date ("today", "3 days ago").
///
/// Session dates arrive as `DD-MM-YYYY` (the backend's scraped format) or
/// ISO `YYYY-MM-DD`. Anything else, including future dates, renders empty.
pub fn relative_age(date: &str) -> String {
    let parsed = NaiveDate::parse_from_str(date.trim(), "%d-%m-%Y")
        .or_else(|_| NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d"));
    let Ok(parsed) = parsed else {
        return String::new();
    };

    let days = (Local::now().date_naive() - parsed).num_days();
    if days < 0 {
        String::new()
    } else if days == 0 {
        "today".to_string()
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 30 {
        format!("{} days ago", days)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}

/// Empty strings render as a dash in table cells.
pub fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() {
        "--"
    } else {
        s
    }
}
