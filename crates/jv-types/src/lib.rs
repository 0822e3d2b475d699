pub mod change;
pub mod format;
pub mod path;
mod util;

pub use change::*;
pub use format::*;
pub use path::JsonPath;
pub use util::*;
