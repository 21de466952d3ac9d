// Postal lookup client - partition fetch, cache, staleness tracking

pub mod cache;
pub mod client;
pub mod tracker;

pub use cache::PrefixCache;
pub use client::{ClientError, PostalClient};
pub use tracker::RequestTracker;
