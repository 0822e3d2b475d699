mod analysis;
mod code;
mod records;
mod summary;
