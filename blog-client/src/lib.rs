use async_trait::async_trait;

pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod state;
pub mod view;

#[cfg(feature = "http")]
mod http_client;

pub use config::FeedConfig;
pub use error::BlogClientError;
#[cfg(feature = "http")]
pub use http_client::BlogClientHttp;
pub use loader::{Liveness, load_blogs};
pub use model::BlogSummary;
pub use state::{BlogListState, FetchEvent};
pub use view::{BlogEntryView, BlogListView};

/// A source of one batch of blog summaries.
///
/// Not `Send`: the browser transport holds JS handles across the await.
#[async_trait(?Send)]
pub trait BlogFeed {
    async fn fetch_batch(&self) -> Result<Vec<BlogSummary>, BlogClientError>;
}
