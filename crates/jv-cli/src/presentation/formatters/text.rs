/// Horizontal rule used between report sections
pub fn rule(ch: char) -> String {
    ch.to_string().repeat(60)
}

/// `1 write`, `2 writes`
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

pub fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or("n/a")
}
