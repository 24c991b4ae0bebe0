pub mod apply;
pub mod criteria;

pub use apply::matches_filters;
pub use criteria::{DateRange, MessageTypeFilter, SearchFilters};
