//! Dashboard and list-view aggregation over one owner's proposals.

pub mod listing;
pub mod summary;

pub use listing::{
    count_by_status, filter_by_status, recent, sort_by_recency, StatusCounts, RECENT_LIMIT,
};
pub use summary::{summarize, ProposalStats};
