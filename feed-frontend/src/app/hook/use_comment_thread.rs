use feed_shared::state::PostState;
use feed_shared::thread::{Comment, CommentId};
use jiff::Timestamp;
use leptos::prelude::*;
use tracing::{debug, trace};
use web_sys::SubmitEvent;

use crate::toolbox::stored_fn::StoredFnWith;

/// Reactive handle over one post's [`PostState`].
#[derive(Clone, Copy)]
pub struct CommentThread {
    pub state: RwSignal<PostState>,
    pub draft: Memo<String>,
    pub can_submit: Memo<bool>,
    pub comments: Memo<Vec<Comment>>,
    pub on_draft: StoredFnWith<String>,
    pub on_submit: StoredFnWith<SubmitEvent>,
    pub on_delete: Callback<CommentId>,
    pub on_like: Callback<CommentId>,
}

impl CommentThread {
    pub fn likes(&self, id: CommentId) -> Signal<u64> {
        let state = self.state;
        Signal::derive(move || state.with(|state| state.thread.likes(id).unwrap_or_default()))
    }
}

pub fn use_comment_thread(placeholder: bool) -> CommentThread {
    let state = RwSignal::new(PostState::new(placeholder, Timestamp::now()));
    let draft = Memo::new(move |_| state.with(|state| state.draft().to_string()));
    let can_submit = Memo::new(move |_| state.with(|state| state.can_submit()));
    let comments = Memo::new(move |_| state.with(|state| state.thread.iter().cloned().collect::<Vec<_>>()));

    let on_draft = move |text: String| {
        state.update(|state| state.set_draft(text));
    };

    let on_submit = move |e: SubmitEvent| {
        e.prevent_default();

        trace!("executing on_submit");

        state.update(|state| match state.submit(Timestamp::now()) {
            Some(id) => debug!("new comment {id}, thread len {}", state.thread.len()),
            None => trace!("empty draft, nothing submitted"),
        });
    };

    let on_delete = Callback::new(move |id: CommentId| {
        state.update(|state| {
            if state.remove(id).is_none() {
                trace!("comment {id} already gone");
            }
        });
    });

    let on_like = Callback::new(move |id: CommentId| {
        state.update(|state| {
            if let Some(likes) = state.like(id) {
                trace!("comment {id} has {likes} likes");
            }
        });
    });

    CommentThread {
        state,
        draft,
        can_submit,
        comments,
        on_draft: StoredValue::new(Box::new(on_draft)),
        on_submit: StoredValue::new(Box::new(on_submit)),
        on_delete,
        on_like,
    }
}
