mod analysis;
mod code;
mod records;
mod summary;

pub use analysis::present_analysis;
pub use code::present_code_report;
pub use records::{present_projection, present_record, present_records};
pub use summary::present_summary;
