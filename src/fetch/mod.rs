use crate::error::Result;

pub mod recommendations;

pub use recommendations::{Recommendation, RecommendationClient};

pub type FetchResult<T> = Result<T>;
