/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Render a statistic for the report. Zero means "no data" and renders empty.
pub fn format_stat(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        // Debug gives the shortest round-trip form and keeps ".0" on whole numbers
        format!("{:?}", value)
    }
}

/// Drop double quotes so a value can sit inside a quoted field
pub fn strip_quotes(value: &str) -> String {
    value.replace('"', "")
}
