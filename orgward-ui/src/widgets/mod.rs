//! Terminal widgets for access state.

mod notice;
mod summary;

pub use notice::rendered_line;
pub use summary::AccessSummaryWidget;
