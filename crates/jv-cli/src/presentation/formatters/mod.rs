pub mod json;
pub mod number;
pub mod text;

pub use json::{compact, pretty, pretty_truncated};
pub use number::{format_cost, format_seconds};
pub use text::{count_label, or_na, rule};
