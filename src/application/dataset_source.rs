// Source trait for the dashboard dataset
use crate::domain::dataset::Dataset;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to fetch dataset from {url}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("dataset request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("dataset from {url} is not a valid document")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch and parse the whole dataset. One attempt, no retry.
    async fn load(&self) -> Result<Dataset, LoadError>;
}
