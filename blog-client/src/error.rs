use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogClientError {
    #[error("Failed to fetch blogs.")]
    Http { status: u16 },
    #[error("{0}")]
    Request(String),
    #[error("Invalid blog payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("An unknown error occurred.")]
    Unknown,
}

impl BlogClientError {
    /// Wraps a transport failure message. A blank message carries nothing
    /// worth showing, so it becomes [`BlogClientError::Unknown`].
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            BlogClientError::Unknown
        } else {
            BlogClientError::Request(message)
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            BlogClientError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for BlogClientError {
    fn from(err: reqwest::Error) -> Self {
        BlogClientError::transport(err.to_string())
    }
}
