mod client;
mod payloads;

pub use client::{ApiClient, DEFAULT_SERVER};
pub use payloads::{ApiReply, BmiRequest, BmiResponse, RecommendationResponse};
