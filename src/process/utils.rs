/// Trim whitespace + strip outer quotes if present.
pub fn clean_str(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].trim()
    } else {
        trimmed
    }
}

/// Best-effort numeric coercion of one cell.
/// Empty, non-numeric and NaN cells are all missing (`None`).
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    let v = clean_str(raw);
    if v.is_empty() {
        return None;
    }
    v.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// A text cell kept verbatim, `None` when it holds only whitespace.
pub fn non_blank(raw: &str) -> Option<&str> {
    (!raw.trim().is_empty()).then_some(raw)
}
