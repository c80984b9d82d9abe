//! What the blog list should show for a given state.
//!
//! The component renders these values as-is; every display decision
//! (priority between loading, error and list, link targets, labels) is made
//! here so it can be tested without a DOM.

use crate::model::BlogSummary;
use crate::state::BlogListState;

pub const LOADING_TEXT: &str = "Loading...";
pub const LIST_HEADING: &str = "Blog List";
pub const READ_MORE_LABEL: &str = "Read More →";
/// Summaries are clamped visually to this many lines.
pub const SUMMARY_LINE_CLAMP: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogListView {
    Loading,
    Error {
        message: String,
    },
    List {
        heading: &'static str,
        entries: Vec<BlogEntryView>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogEntryView {
    pub key: String,
    pub image_src: String,
    pub image_alt: String,
    pub title: String,
    pub summary: String,
    pub href: String,
    pub link_label: &'static str,
}

impl From<&BlogSummary> for BlogEntryView {
    fn from(blog: &BlogSummary) -> Self {
        Self {
            key: blog.id.clone(),
            image_src: blog.featured_image.clone(),
            image_alt: blog.title.clone(),
            title: blog.title.clone(),
            summary: blog.summary.clone(),
            href: blog.detail_path(),
            link_label: READ_MORE_LABEL,
        }
    }
}

impl From<&BlogListState> for BlogListView {
    fn from(state: &BlogListState) -> Self {
        if state.loading() {
            return BlogListView::Loading;
        }
        if let Some(message) = state.error() {
            return BlogListView::Error {
                message: message.to_string(),
            };
        }
        BlogListView::List {
            heading: LIST_HEADING,
            entries: state.blogs().iter().map(BlogEntryView::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogClientError;
    use crate::state::FetchEvent;

    fn batch(n: usize) -> Vec<BlogSummary> {
        (1..=n)
            .map(|i| {
                BlogSummary::new(
                    i.to_string(),
                    format!("Post {i}"),
                    format!("http://x/{i}.jpg"),
                    format!("summary {i}"),
                )
            })
            .collect()
    }

    fn loaded(blogs: Vec<BlogSummary>) -> BlogListState {
        let mut state = BlogListState::default();
        state.apply(FetchEvent::Started);
        state.apply(FetchEvent::Succeeded(blogs));
        state.apply(FetchEvent::Settled);
        state
    }

    #[test]
    fn one_entry_per_blog() {
        for n in 0..=6 {
            let BlogListView::List { heading, entries } = BlogListView::from(&loaded(batch(n)))
            else {
                panic!("expected list view for {n} blogs");
            };
            assert_eq!(heading, LIST_HEADING);
            assert_eq!(entries.len(), n);
            for (i, entry) in entries.iter().enumerate() {
                let id = (i + 1).to_string();
                assert_eq!(entry.href, format!("/blog/{id}"));
                assert_eq!(entry.image_src, format!("http://x/{id}.jpg"));
                assert_eq!(entry.title, format!("Post {id}"));
                assert_eq!(entry.summary, format!("summary {id}"));
            }
        }
    }

    #[test]
    fn single_blog_scenario() {
        let state = loaded(vec![BlogSummary::new("1", "A", "http://x/a.jpg", "s1")]);

        let view = BlogListView::from(&state);
        assert_eq!(
            view,
            BlogListView::List {
                heading: LIST_HEADING,
                entries: vec![BlogEntryView {
                    key: "1".into(),
                    image_src: "http://x/a.jpg".into(),
                    image_alt: "A".into(),
                    title: "A".into(),
                    summary: "s1".into(),
                    href: "/blog/1".into(),
                    link_label: READ_MORE_LABEL,
                }],
            }
        );
    }

    #[test]
    fn loading_wins_over_error_and_blogs() {
        let mut state = loaded(batch(2));
        state.apply(FetchEvent::Failed(BlogClientError::Unknown));
        state.apply(FetchEvent::Started);

        assert_eq!(BlogListView::from(&state), BlogListView::Loading);
    }

    #[test]
    fn error_hides_the_list() {
        let mut state = loaded(batch(3));
        state.apply(FetchEvent::Failed(BlogClientError::Http { status: 500 }));

        assert_eq!(
            BlogListView::from(&state),
            BlogListView::Error {
                message: "Failed to fetch blogs.".into()
            }
        );
    }

    #[test]
    fn initial_state_is_an_empty_list() {
        let view = BlogListView::from(&BlogListState::default());
        assert_eq!(
            view,
            BlogListView::List {
                heading: LIST_HEADING,
                entries: Vec::new(),
            }
        );
    }
}
