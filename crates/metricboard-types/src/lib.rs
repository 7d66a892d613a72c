pub mod dashboard;
pub mod metric;

pub use dashboard::*;
pub use metric::*;
