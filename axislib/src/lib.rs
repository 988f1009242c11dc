pub mod error;
pub mod labels;
pub mod ordering;
pub mod describe;

pub use ordering::{AxisOrdering, check, parse};
