/// Seconds with one decimal, e.g. `12.3s`
pub fn format_seconds(secs: f64) -> String {
    format!("{:.1}s", secs)
}

/// US dollars with four decimals, e.g. `$0.0421`
pub fn format_cost(usd: f64) -> String {
    format!("${:.4}", usd)
}
