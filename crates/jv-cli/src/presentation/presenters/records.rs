use crate::presentation::view_models::{
    CommandResultViewModel, ProjectedRowViewModel, ProjectionViewModel, RecordListViewModel,
    RecordViewModel,
};
use jv_engine::{Numbered, ProjectedRecord};
use serde_json::Value;

pub fn present_record(
    position: usize,
    record: &Value,
    truncate: Option<usize>,
) -> CommandResultViewModel<RecordViewModel> {
    CommandResultViewModel::new(RecordViewModel {
        position,
        record: record.clone(),
        truncate,
    })
}

pub fn present_records(
    type_filter: &str,
    hits: &[Numbered<'_>],
    truncate: Option<usize>,
) -> CommandResultViewModel<RecordListViewModel> {
    CommandResultViewModel::new(RecordListViewModel {
        type_filter: type_filter.to_string(),
        records: hits
            .iter()
            .map(|hit| RecordViewModel {
                position: hit.position,
                record: hit.record.clone(),
                truncate,
            })
            .collect(),
    })
}

pub fn present_projection(
    keys: Vec<String>,
    rows: Vec<ProjectedRecord>,
) -> CommandResultViewModel<ProjectionViewModel> {
    CommandResultViewModel::new(ProjectionViewModel {
        keys,
        rows: rows
            .into_iter()
            .map(|row| ProjectedRowViewModel {
                position: row.position,
                fields: row.fields,
            })
            .collect(),
    })
}
