pub mod metadata;
pub mod recommend;

pub use metadata::{MetadataFetcher, TmdbClient};
