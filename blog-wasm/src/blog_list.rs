use crate::client::GlooBlogFeed;
use blog_client::view::{LOADING_TEXT, SUMMARY_LINE_CLAMP};
use blog_client::{BlogEntryView, BlogListState, BlogListView, FeedConfig, Liveness, load_blogs};
use dioxus::prelude::*;

/// Fetches one batch of blogs on mount and shows it.
#[component]
pub fn BlogList(#[props(default)] config: FeedConfig) -> Element {
    let mut state = use_signal(BlogListState::default);
    let liveness = use_hook(Liveness::new);

    {
        let liveness = liveness.clone();
        use_drop(move || liveness.end());
    }

    // Reads no signals, so it runs once per mount.
    use_future(move || {
        let feed = GlooBlogFeed::new(config.clone());
        let liveness = liveness.clone();
        async move {
            load_blogs(&feed, &liveness, |event| state.write().apply(event)).await;
        }
    });

    let view = BlogListView::from(&*state.read());

    match view {
        BlogListView::Loading => rsx! {
            div { class: "flex items-center justify-center min-h-screen",
                p { class: "text-xl font-semibold text-gray-500", "{LOADING_TEXT}" }
            }
        },
        BlogListView::Error { message } => rsx! {
            div { class: "flex items-center justify-center min-h-screen",
                p { class: "text-xl font-semibold text-red-500", "{message}" }
            }
        },
        BlogListView::List { heading, entries } => rsx! {
            div { class: "bg-gray-100 py-10 mt-16",
                div { class: "container mx-auto px-4",
                    h1 { class: "text-4xl font-bold text-gray-800 mb-8 text-center", "{heading}" }
                    div { class: "space-y-8",
                        for entry in entries {
                            BlogEntryCard { key: "{entry.key}", entry: entry.clone() }
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn BlogEntryCard(entry: BlogEntryView) -> Element {
    rsx! {
        div { class: "flex items-center bg-white shadow-lg rounded-lg overflow-hidden p-4",
            img {
                src: "{entry.image_src}",
                alt: "{entry.image_alt}",
                class: "w-1/4 h-48 object-cover",
            }
            div { class: "w-3/4 p-6",
                h2 { class: "text-2xl font-semibold text-gray-800 mb-4", "{entry.title}" }
                p { class: "text-gray-600 line-clamp-{SUMMARY_LINE_CLAMP}", "{entry.summary}" }
                a {
                    href: "{entry.href}",
                    class: "mt-4 inline-block text-blue-500 hover:text-blue-700",
                    "{entry.link_label}"
                }
            }
        }
    }
}
