use feed_shared::datefmt::DateFmt;
use feed_shared::post::Author;
use feed_shared::settings::Settings;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use page::home::Home;
use tracing::debug;

pub mod components;
pub mod hook;
pub mod page;

/// Shared read-only context for every component in the feed.
#[derive(Clone, Copy, Debug)]
pub struct GlobalState {
    pub viewer: StoredValue<Author>,
    pub date_fmt: StoredValue<DateFmt>,
    pub placeholder: bool,
}

impl GlobalState {
    pub fn new(settings: &Settings, date_fmt: DateFmt) -> Self {
        Self {
            viewer: StoredValue::new(settings.viewer.clone()),
            date_fmt: StoredValue::new(date_fmt),
            placeholder: settings.thread.placeholder,
        }
    }
}

#[component]
pub fn App(settings: Settings, date_fmt: DateFmt) -> impl IntoView {
    provide_meta_context();
    provide_context(GlobalState::new(&settings, date_fmt));
    debug!("rendering feed for {}", settings.viewer.name);

    let Settings { profile, posts, .. } = settings;

    view! {
        <Title text="Ignite Feed" />
        <Home profile posts />
    }
}
