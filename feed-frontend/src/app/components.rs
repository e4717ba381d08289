pub mod avatar {
    use leptos::prelude::*;

    pub fn avatar_class(has_border: bool) -> &'static str {
        if has_border {
            "avatar w-[3.25rem] h-[3.25rem] rounded-lg border-4 border-gray-800 outline outline-2 outline-green-500"
        } else {
            "avatar w-12 h-12 rounded-lg"
        }
    }

    #[component]
    pub fn Avatar(
        #[prop(into)] src: String,
        #[prop(default = true)] has_border: bool,
        #[prop(optional, into)] alt: String,
    ) -> impl IntoView {
        view! { <img class=avatar_class(has_border) src=src alt=alt /> }
    }
}

pub mod icon {
    use leptos::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
    #[strum(serialize_all = "kebab-case")]
    pub enum IconKind {
        ThumbsUp,
        Trash,
        PencilLine,
    }

    impl IconKind {
        /// Path data for a 256x256 view box.
        pub fn path(self) -> &'static str {
            match self {
                IconKind::ThumbsUp => {
                    "M234 80.12A24 24 0 0 0 216 72h-56V56a40 40 0 0 0-40-40 8 8 0 0 0-7.16 4.42L75.06 96H32a16 16 0 0 0-16 16v88a16 16 0 0 0 16 16h172a24 24 0 0 0 23.82-21l12-96A24 24 0 0 0 234 80.12ZM32 112h40v88H32Zm191.94-15-12 96a8 8 0 0 1-7.94 7H88v-94.11l36.71-73.43A24 24 0 0 1 144 56v24a8 8 0 0 0 8 8h64a8 8 0 0 1 7.94 9Z"
                }
                IconKind::Trash => {
                    "M216 48h-40v-8a24 24 0 0 0-24-24h-48a24 24 0 0 0-24 24v8H40a8 8 0 0 0 0 16h8v144a16 16 0 0 0 16 16h128a16 16 0 0 0 16-16V64h8a8 8 0 0 0 0-16ZM96 40a8 8 0 0 1 8-8h48a8 8 0 0 1 8 8v8H96Zm96 168H64V64h128Zm-80-104v64a8 8 0 0 1-16 0v-64a8 8 0 0 1 16 0Zm48 0v64a8 8 0 0 1-16 0v-64a8 8 0 0 1 16 0Z"
                }
                IconKind::PencilLine => {
                    "M227.31 73.37 182.63 28.68a16 16 0 0 0-22.63 0L36.69 152A15.86 15.86 0 0 0 32 163.31V208a16 16 0 0 0 16 16h168a8 8 0 0 0 0-16H115.32l112-112a16 16 0 0 0 0-22.63ZM92.69 208H48v-44.69l88-88L180.69 120ZM192 108.69 147.32 64l24-24L216 84.69Z"
                }
            }
        }
    }

    #[component]
    pub fn Icon(kind: IconKind, #[prop(default = 24)] size: u32) -> impl IntoView {
        let size = size.to_string();
        view! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                class=format!("icon icon-{kind}")
                width=size.clone()
                height=size
                viewBox="0 0 256 256"
                fill="currentColor"
                aria-hidden="true"
            >
                <path d=kind.path() />
            </svg>
        }
    }

}

pub mod header {
    use leptos::prelude::*;

    #[component]
    pub fn Header() -> impl IntoView {
        view! {
            <header class="bg-gray-800 flex justify-center py-5">
                <strong class="text-gray-100 text-2xl font-bold">"Ignite Feed"</strong>
            </header>
        }
    }
}

pub mod sidebar {
    use feed_shared::settings::Profile;
    use leptos::prelude::*;

    use crate::app::components::{
        avatar::Avatar,
        icon::{Icon, IconKind},
    };

    #[component]
    pub fn Sidebar(profile: Profile) -> impl IntoView {
        let Profile {
            avatar_url,
            name,
            role,
            cover_url,
        } = profile;

        view! {
            <aside class="sidebar bg-gray-800 rounded-lg overflow-hidden">
                <img class="w-full h-[72px] object-cover" src=cover_url />

                <div class="profile flex flex-col items-center -mt-7">
                    <Avatar src=avatar_url />
                    <strong class="mt-4 text-gray-100 leading-relaxed">{name}</strong>
                    <span class="text-sm text-gray-400 leading-relaxed">{role}</span>
                </div>

                <footer class="border-t border-gray-600 mt-6 pt-6 px-8 pb-8">
                    <a href="" class="flex items-center justify-center gap-2 h-[50px] rounded-lg border border-green-500 text-green-500 font-bold">
                        <Icon kind=IconKind::PencilLine size=20 />
                        "Edite seu perfil"
                    </a>
                </footer>
            </aside>
        }
    }
}

pub mod comment {
    use feed_shared::post::Author;
    use feed_shared::thread::{Comment, CommentId};
    use jiff::Timestamp;
    use leptos::prelude::*;

    use crate::app::GlobalState;
    use crate::app::components::{
        avatar::Avatar,
        icon::{Icon, IconKind},
    };

    #[component]
    pub fn CommentItem(
        comment: Comment,
        author: Author,
        #[prop(into)] likes: Signal<u64>,
        on_delete: Callback<CommentId>,
        on_like: Callback<CommentId>,
    ) -> impl IntoView {
        let global_state = expect_context::<GlobalState>();
        let Comment {
            id,
            text,
            created_at,
            ..
        } = comment;
        let (title, datetime, relative) = global_state.date_fmt.with_value(|fmt| {
            (
                fmt.absolute(created_at),
                fmt.datetime_attr(created_at),
                fmt.relative(created_at, Timestamp::now()),
            )
        });

        view! {
            <div class="comment flex gap-4 mt-6" data-comment-id=id.to_string()>
                <Avatar src=author.avatar_url has_border=false />
                <div class="flex-1">
                    <div class="bg-gray-700 rounded-lg p-4">
                        <header class="flex items-start justify-between">
                            <div class="flex flex-col">
                                <strong class="text-sm text-gray-100">{author.name}</strong>
                                <time class="text-xs text-gray-400" title=title datetime=datetime>{relative}</time>
                            </div>
                            <button
                                title="Deletar comentário"
                                class="comment-delete text-gray-400 hover:text-red-500"
                                on:click=move |_| on_delete.run(id)
                            >
                                <Icon kind=IconKind::Trash size=24 />
                            </button>
                        </header>
                        <p class="comment-content mt-4 text-gray-300">{text}</p>
                    </div>
                    <footer class="mt-4">
                        <button
                            class="comment-like flex items-center text-gray-400 hover:text-green-300"
                            on:click=move |_| on_like.run(id)
                        >
                            <Icon kind=IconKind::ThumbsUp size=20 />
                            "Aplaudir"
                            <span class="comment-likes before:content-['•'] before:px-1">{move || likes.get()}</span>
                        </button>
                    </footer>
                </div>
            </div>
        }
    }
}

pub mod post {
    use feed_shared::post::{ContentBlock, Post};
    use feed_shared::valid::comment_validity;
    use jiff::Timestamp;
    use leptos::{ev, html, prelude::*};
    use tracing::trace;
    use web_sys::HtmlTextAreaElement;

    use crate::app::GlobalState;
    use crate::app::components::{avatar::Avatar, comment::CommentItem};
    use crate::app::hook::use_comment_thread::use_comment_thread;
    use crate::toolbox::prelude::*;

    pub fn content_block_view(block: ContentBlock) -> Option<AnyView> {
        let href = block.href().map(str::to_string);
        match block {
            ContentBlock::Paragraph { text } => Some(view! { <p class="mt-4">{text}</p> }.into_any()),
            ContentBlock::Link { text, .. } => Some(
                view! {
                    <p class="mt-4">
                        <a class="font-bold text-green-300 hover:text-green-500" href=href>{text}</a>
                    </p>
                }
                .into_any(),
            ),
            ContentBlock::Unsupported => {
                trace!("skipping unsupported content block");
                None
            }
        }
    }

    #[component]
    pub fn PostItem(post: Post) -> impl IntoView {
        let global_state = expect_context::<GlobalState>();
        let viewer = global_state.viewer.get_value();
        let thread = use_comment_thread(global_state.placeholder);
        let textarea_ref = NodeRef::<html::Textarea>::new();

        let Post {
            id,
            author,
            published_at,
            content,
        } = post;
        let (title, datetime, relative) = global_state.date_fmt.with_value(|fmt| {
            (
                fmt.absolute(published_at),
                fmt.datetime_attr(published_at),
                fmt.relative(published_at, Timestamp::now()),
            )
        });
        let body = content
            .into_iter()
            .filter_map(content_block_view)
            .collect_view();

        textarea_ref.add_event_listener(ev::Custom::<web_sys::Event>::new("invalid"), {
            move |e: web_sys::Event| {
                let textarea = event_target::<HtmlTextAreaElement>(&e);
                if let Some(msg) = comment_validity(textarea.value()) {
                    textarea.set_custom_validity(&msg);
                }
            }
        });

        let on_input = move |e: web_sys::Event| {
            let textarea = event_target::<HtmlTextAreaElement>(&e);
            textarea.set_custom_validity("");
            thread.on_draft.run_with(textarea.value());
        };

        view! {
            <article class="post bg-gray-800 rounded-lg p-10 mb-8" data-post-id=id.0.to_string()>
                <header class="flex items-center justify-between">
                    <div class="flex items-center gap-4">
                        <Avatar src=author.avatar_url />
                        <div class="flex flex-col">
                            <strong class="text-gray-100 leading-relaxed">{author.name}</strong>
                            <span class="text-sm text-gray-400 leading-relaxed">{author.role}</span>
                        </div>
                    </div>
                    <time class="text-sm text-gray-400" title=title datetime=datetime>{relative}</time>
                </header>

                <div class="post-content text-gray-300 leading-relaxed mt-6">{body}</div>

                <form class="comment-form w-full mt-6 pt-6 border-t border-gray-600" on:submit=thread.on_submit.to_fn()>
                    <strong class="text-gray-100 leading-relaxed">"Deixe seu feedback"</strong>
                    <textarea
                        node_ref=textarea_ref
                        class="w-full bg-gray-900 border-0 resize-none h-24 p-4 rounded-lg text-gray-100 mt-4"
                        name="comment"
                        placeholder="Escreva um comentário..."
                        required=true
                        prop:value=move || thread.draft.get()
                        on:input=move |e| on_input(e.into())
                    ></textarea>
                    <footer>
                        <button
                            type="submit"
                            class="mt-4 py-4 px-6 rounded-lg bg-green-500 text-white font-bold disabled:opacity-70 disabled:cursor-not-allowed"
                            disabled=move || !thread.can_submit.get()
                        >
                            "Comentar"
                        </button>
                    </footer>
                </form>

                <div class="comment-list mt-8">
                    <For
                        each=move || thread.comments.get()
                        key=|comment| comment.id
                        children=move |comment| {
                            let likes = thread.likes(comment.id);
                            view! {
                                <CommentItem
                                    comment
                                    author=viewer.clone()
                                    likes
                                    on_delete=thread.on_delete
                                    on_like=thread.on_like
                                />
                            }
                        }
                    />
                </div>
            </article>
        }
    }
}
