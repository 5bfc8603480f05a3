mod client;
mod error;
mod types;

pub use client::CasedClient;
pub use error::ApiError;
pub use types::AnalysisRequest;
