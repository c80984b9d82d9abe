use async_trait::async_trait;
use blog_client::{BlogClientError, BlogFeed, BlogSummary, FeedConfig};
use gloo_net::http::Request;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct GlooBlogFeed {
    config: FeedConfig,
}

impl GlooBlogFeed {
    pub fn new(config: FeedConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl BlogFeed for GlooBlogFeed {
    #[instrument(skip(self))]
    async fn fetch_batch(&self) -> Result<Vec<BlogSummary>, BlogClientError> {
        let url = self.config.endpoint();
        let response = Request::get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.ok() {
            warn!(%url, status = response.status(), "blog batch request rejected");
            return Err(BlogClientError::Http {
                status: response.status(),
            });
        }

        let body = response.text().await.map_err(transport_error)?;
        let blogs = BlogSummary::parse_batch(&body)?;
        info!(%url, count = blogs.len(), "blog batch received");

        Ok(blogs)
    }
}

// A thrown value that isn't a JS `Error` comes back with an empty message.
fn transport_error(err: gloo_net::Error) -> BlogClientError {
    match err {
        gloo_net::Error::JsError(js) => BlogClientError::transport(js.message),
        other => BlogClientError::transport(other.to_string()),
    }
}
