pub mod summary;

pub use summary::{SummaryCommand, SummaryConfig};
