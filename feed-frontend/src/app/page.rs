pub mod home {
    use feed_shared::post::Post;
    use feed_shared::settings::Profile;
    use leptos::prelude::*;

    use crate::app::components::{header::Header, post::PostItem, sidebar::Sidebar};

    #[component]
    pub fn Home(profile: Profile, posts: Vec<Post>) -> impl IntoView {
        let is_empty = posts.is_empty();
        let posts = posts
            .into_iter()
            .map(|post| view! { <PostItem post /> })
            .collect_view();

        view! {
            <div class="min-h-screen bg-gray-900 text-gray-300">
                <Header />
                <div class="max-w-[70rem] mx-auto my-8 px-4 grid grid-cols-1 md:grid-cols-[256px_1fr] gap-8 items-start">
                    <Sidebar profile />
                    <main>
                        {is_empty
                            .then(|| {
                                view! { <p class="empty-feed text-gray-400">"Nenhuma publicação ainda."</p> }
                            })}
                        {posts}
                    </main>
                </div>
            </div>
        }
    }
}

pub mod startup_error {
    use leptos::prelude::*;

    #[component]
    pub fn StartupError(msg: String) -> impl IntoView {
        view! {
            <main class="min-h-screen grid place-items-center bg-gray-900 text-red-500">
                <p class="startup-error">{msg}</p>
            </main>
        }
    }
}
