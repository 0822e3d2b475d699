pub mod analysis;
pub mod code;
pub mod common;
pub mod records;
pub mod result;
pub mod summary;

pub use analysis::{
    AnalysisViewModel, ExcerptViewModel, OutcomeViewModel, SessionInfoViewModel,
    TokenUsageViewModel, ToolCountViewModel,
};
pub use code::{CodeChangeViewModel, CodeReportViewModel, ExportViewModel, FileStatsViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use records::{ProjectedRowViewModel, ProjectionViewModel, RecordListViewModel, RecordViewModel};
pub use result::CommandResultViewModel;
pub use summary::{SkippedLineViewModel, SummaryViewModel, TypeCountViewModel};

use std::fmt;

/// Bridge from a view model to its text layout
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
