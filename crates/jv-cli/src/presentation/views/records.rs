use std::fmt;

use crate::presentation::formatters::{compact, pretty_truncated};
use crate::presentation::view_models::{
    CreateView, ProjectionViewModel, RecordListViewModel, RecordViewModel,
};

impl CreateView for RecordViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(RecordView { data: self })
    }
}

struct RecordView<'a> {
    data: &'a RecordViewModel,
}

impl<'a> fmt::Display for RecordView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== line {} ===", self.data.position)?;
        writeln!(f, "{}", pretty_truncated(&self.data.record, self.data.truncate))
    }
}

impl CreateView for RecordListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(RecordListView { data: self })
    }
}

struct RecordListView<'a> {
    data: &'a RecordListViewModel,
}

impl<'a> fmt::Display for RecordListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.data.records {
            write!(f, "{}", RecordView { data: record })?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl CreateView for ProjectionViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ProjectionView { data: self })
    }
}

struct ProjectionView<'a> {
    data: &'a ProjectionViewModel,
}

impl<'a> fmt::Display for ProjectionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data.rows {
            writeln!(f, "line {}: {}", row.position, compact(&row.fields))?;
        }
        Ok(())
    }
}
