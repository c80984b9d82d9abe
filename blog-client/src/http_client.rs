use crate::BlogFeed;
use crate::config::FeedConfig;
use crate::error::BlogClientError;
use crate::model::BlogSummary;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct BlogClientHttp {
    client: Arc<Client>,
    config: FeedConfig,
}

impl BlogClientHttp {
    pub fn connect(config: FeedConfig) -> Result<Self, BlogClientError> {
        Ok(Self {
            client: Arc::new(Client::builder().build()?),
            config,
        })
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl BlogFeed for BlogClientHttp {
    #[instrument(skip(self))]
    async fn fetch_batch(&self) -> Result<Vec<BlogSummary>, BlogClientError> {
        let url = self.config.endpoint();
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "blog batch request rejected");
            return Err(BlogClientError::Http {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let blogs = BlogSummary::parse_batch(&body)?;

        if blogs.len() > self.config.batch_size as usize {
            warn!(
                requested = self.config.batch_size,
                received = blogs.len(),
                "server returned more blogs than requested"
            );
        }
        info!(%url, count = blogs.len(), "blog batch received");

        Ok(blogs)
    }
}
