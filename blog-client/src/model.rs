use crate::error::BlogClientError;
use derive_more::Display;
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

/// One post as returned by the random-blogs endpoint. Extra fields in the
/// payload are ignored; the four below are required strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("Blog {{ id: {}, title: {} }}", id, title)]
pub struct BlogSummary {
    #[serde(deserialize_with = "non_empty_id")]
    pub id: String,
    pub title: String,
    pub featured_image: String,
    pub summary: String,
}

impl BlogSummary {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        featured_image: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            featured_image: featured_image.into(),
            summary: summary.into(),
        }
    }

    pub fn detail_path(&self) -> String {
        format!("/blog/{}", self.id)
    }

    /// Parses a response body into a batch, keeping server order.
    pub fn parse_batch(body: &str) -> Result<Vec<Self>, BlogClientError> {
        Ok(serde_json::from_str(body)?)
    }
}

fn non_empty_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let id = String::deserialize(deserializer)?;
    if id.is_empty() {
        return Err(de::Error::invalid_value(
            Unexpected::Str(&id),
            &"a non-empty blog id",
        ));
    }
    Ok(id)
}
