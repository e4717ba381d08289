use jiff::Timestamp;
use tracing::{debug, trace};

use crate::thread::{Comment, CommentId, CommentThread};
use crate::valid::proccess_comment;

/// State owned by one post view: its comment thread and the uncommitted draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostState {
    pub thread: CommentThread,
    draft: String,
}

impl PostState {
    pub fn new(placeholder: bool, now: Timestamp) -> Self {
        let thread = if placeholder {
            CommentThread::with_placeholder(now)
        } else {
            CommentThread::new()
        };

        Self {
            thread,
            draft: String::new(),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn is_draft_empty(&self) -> bool {
        self.draft.is_empty()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_draft_empty()
    }

    /// Appends the draft to the thread and clears it. An empty draft leaves everything untouched.
    pub fn submit(&mut self, now: Timestamp) -> Option<CommentId> {
        let text = match proccess_comment(&self.draft) {
            Ok(text) => text,
            Err(err) => {
                trace!("submit blocked: {err}");
                return None;
            }
        };
        let id = self.thread.push(text, now);
        self.draft.clear();
        debug!("comment {id} submitted");
        Some(id)
    }

    pub fn remove(&mut self, id: CommentId) -> Option<Comment> {
        let comment = self.thread.remove(id);
        if comment.is_some() {
            debug!("comment {id} deleted");
        }
        comment
    }

    pub fn remove_text(&mut self, text: &str) -> usize {
        self.thread.remove_text(text)
    }

    pub fn like(&mut self, id: CommentId) -> Option<u64> {
        self.thread.like(id)
    }
}

#[cfg(test)]
mod state_tests {
    use super::PostState;
    use jiff::Timestamp;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn now() -> Timestamp {
        Timestamp::UNIX_EPOCH
    }

    #[test]
    fn test_initial_state() {
        let state = PostState::new(true, now());
        assert_eq!(state.thread.texts(), vec![""]);
        assert_eq!(state.draft(), "");
        assert!(!state.can_submit());

        let state = PostState::new(false, now());
        assert!(state.thread.is_empty());
    }

    #[test]
    fn test_submit_appends_and_clears_draft() {
        let mut state = PostState::new(true, now());
        state.set_draft("Great post!");
        assert!(state.can_submit());

        let id = state.submit(now());
        assert!(id.is_some());
        assert_eq!(state.thread.texts(), vec!["", "Great post!"]);
        assert_eq!(state.draft(), "");
        assert!(state.is_draft_empty());
    }

    #[test]
    fn test_submit_each_call_grows_by_one() {
        let mut state = PostState::new(false, now());
        for (i, text) in ["one", " ", "three", "três"].into_iter().enumerate() {
            state.set_draft(text);
            let id = state.submit(now());
            assert_eq!(state.thread.len(), i + 1);
            assert_eq!(state.thread.iter().last().map(|c| c.id), id);
            assert_eq!(state.thread.iter().last().map(|c| c.text.as_str()), Some(text));
        }
    }

    #[test]
    fn test_submit_empty_is_noop() {
        let mut state = PostState::new(true, now());
        let before = state.clone();

        assert_eq!(state.submit(now()), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_remove_placeholder() {
        let mut state = PostState::new(true, now());
        state.set_draft("Great post!");
        state.submit(now());

        assert_eq!(state.remove_text(""), 1);
        assert_eq!(state.thread.texts(), vec!["Great post!"]);
    }

    #[test]
    fn test_double_submit_then_remove_text() {
        let mut state = PostState::new(true, now());
        state.set_draft("Nice");
        let first = state.submit(now());
        state.set_draft("Nice");
        let second = state.submit(now());

        assert_ne!(first, second);
        assert_eq!(state.thread.texts(), vec!["", "Nice", "Nice"]);

        assert_eq!(state.remove_text("Nice"), 2);
        assert_eq!(state.thread.texts(), vec![""]);
    }

    #[test]
    fn test_remove_and_like_by_id() {
        let mut state = PostState::new(false, now());
        state.set_draft("Nice");
        let first = state.submit(now()).unwrap();
        state.set_draft("Nice");
        let second = state.submit(now()).unwrap();

        assert_eq!(state.like(second), Some(1));
        assert_eq!(state.remove(first).map(|c| c.id), Some(first));
        assert_eq!(state.remove(first), None);
        assert_eq!(state.thread.texts(), vec!["Nice"]);
        assert_eq!(state.thread.likes(second), Some(1));
    }
}
