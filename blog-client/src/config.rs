use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://jsonfakery.com";
pub const DEFAULT_BATCH_SIZE: u32 = 6;

/// Where the random-blogs batch is fetched from.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
}

impl FeedConfig {
    pub fn new(base_url: &str, batch_size: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            batch_size,
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/blogs/random/{}",
            self.base_url.trim_end_matches('/'),
            self.batch_size
        )
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_BATCH_SIZE)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_batch_size() -> u32 {
    DEFAULT_BATCH_SIZE
}
