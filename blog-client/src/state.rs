use crate::error::BlogClientError;
use crate::model::BlogSummary;

/// Steps of a single fetch, in the order the driver emits them.
#[derive(Debug)]
pub enum FetchEvent {
    Started,
    Succeeded(Vec<BlogSummary>),
    Failed(BlogClientError),
    Settled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogListState {
    blogs: Vec<BlogSummary>,
    loading: bool,
    error: Option<String>,
}

impl BlogListState {
    pub fn blogs(&self) -> &[BlogSummary] {
        &self.blogs
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn apply(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Started => self.loading = true,
            FetchEvent::Succeeded(blogs) => self.blogs = blogs,
            FetchEvent::Failed(err) => self.error = Some(err.to_string()),
            FetchEvent::Settled => self.loading = false,
        }
    }
}
