// HTTP dataset source - One GET, body parsed as the dataset document
use crate::application::dataset_source::{DatasetSource, LoadError};
use crate::domain::dataset::Dataset;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpDatasetSource {
    url: String,
    client: reqwest::Client,
}

impl HttpDatasetSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    fn transport_error(&self, source: reqwest::Error) -> LoadError {
        LoadError::Transport {
            url: self.url.clone(),
            source: Box::new(source),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    async fn load(&self) -> Result<Dataset, LoadError> {
        tracing::debug!("Fetching dataset from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        serde_json::from_str(&body).map_err(|source| LoadError::Parse {
            url: self.url.clone(),
            source,
        })
    }
}
