mod context;

pub mod analyze;
pub mod code;
pub mod filter;
pub mod keys;
pub mod line;
pub mod summary;

pub use context::HandlerContext;
