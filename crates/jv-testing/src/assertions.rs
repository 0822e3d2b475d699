//! Custom assertions for jv output.

use anyhow::{Context, Result};

/// Assert that every needle occurs in `haystack`, each after the previous one.
pub fn assert_in_order(haystack: &str, needles: &[&str]) -> Result<()> {
    let mut offset = 0;
    for needle in needles {
        let found = haystack[offset..].find(needle).with_context(|| {
            format!("Expected {:?} after byte {} in:\n{}", needle, offset, haystack)
        })?;
        offset += found + needle.len();
    }
    Ok(())
}

/// Assert the number of lines starting with `prefix`.
pub fn assert_line_count(haystack: &str, prefix: &str, expected: usize) -> Result<()> {
    let actual = haystack.lines().filter(|l| l.starts_with(prefix)).count();
    if actual != expected {
        anyhow::bail!(
            "Expected {} lines starting with {:?}, got {}:\n{}",
            expected,
            prefix,
            actual,
            haystack
        );
    }
    Ok(())
}
