//! Feed pipeline for the populate operation
//!
//! fetch (remote JSON) -> normalize (flatten, rank-filter, field map)
//! -> merge (combined top-100, rank stripped)

pub mod fetch;
pub mod merge;
pub mod normalize;

pub use fetch::FeedClient;
pub use merge::{merge_top, TOP_N};
pub use normalize::{normalize_feed, RankedApp};
