pub mod client;
pub mod error;
pub mod types;

pub use client::{StatusClient, StatusFetcher};
pub use error::ApiError;
pub use types::{JobStatus, StatusResponse};
