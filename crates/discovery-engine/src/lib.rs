pub mod ranking;
pub mod response;

pub use ranking::RankingService;
pub use response::{RankedRepository, ResponseMetadata, SearchResponse};
