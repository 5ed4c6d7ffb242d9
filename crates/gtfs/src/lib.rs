//! Reading GTFS schedule feeds into typed entity collections.

pub mod data_model;
pub mod domain_model;
pub mod error;
pub mod feed;

pub use error::FeedError;
pub use feed::GtfsFeed;
