use blog_client::FeedConfig;
use blog_list::BlogList;
use dioxus::prelude::*;

mod blog_list;
mod client;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        BlogList { config: FeedConfig::default() }
    }
}
