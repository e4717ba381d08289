use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Identity of a comment inside its thread, allocated in increasing order and never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CommentId(u64);

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub created_at: Timestamp,
    pub likes: u64,
}

/// Ordered comments of one post. Insertion order is display order, newest last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentThread {
    comments: Vec<Comment>,
    next_id: u64,
}

impl CommentThread {
    pub fn new() -> Self {
        Self::default()
    }

    /// Thread holding a single empty entry, the state a post view starts in.
    pub fn with_placeholder(now: Timestamp) -> Self {
        let mut thread = Self::new();
        thread.push("", now);
        thread
    }

    pub fn push(&mut self, text: impl Into<String>, now: Timestamp) -> CommentId {
        let id = CommentId(self.next_id);
        self.next_id += 1;
        self.comments.push(Comment {
            id,
            text: text.into(),
            created_at: now,
            likes: 0,
        });
        trace!("comment {id} pushed, thread len {}", self.comments.len());
        id
    }

    pub fn remove(&mut self, id: CommentId) -> Option<Comment> {
        let pos = self.comments.iter().position(|comment| comment.id == id)?;
        let comment = self.comments.remove(pos);
        trace!("comment {id} removed, thread len {}", self.comments.len());
        Some(comment)
    }

    /// Removes every comment whose text equals `text` and returns how many were removed.
    pub fn remove_text(&mut self, text: &str) -> usize {
        let len = self.comments.len();
        self.comments.retain(|comment| comment.text != text);
        let removed = len - self.comments.len();
        trace!("removed {removed} comments matching {text:?}");
        removed
    }

    pub fn like(&mut self, id: CommentId) -> Option<u64> {
        let comment = self.comments.iter_mut().find(|comment| comment.id == id)?;
        comment.likes = comment.likes.saturating_add(1);
        Some(comment.likes)
    }

    pub fn likes(&self, id: CommentId) -> Option<u64> {
        self.get(id).map(|comment| comment.likes)
    }

    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Comment> {
        self.comments.iter()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.comments.iter().map(|comment| comment.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

impl<'a> IntoIterator for &'a CommentThread {
    type Item = &'a Comment;
    type IntoIter = std::slice::Iter<'a, Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod thread_tests {
    use super::{CommentId, CommentThread};
    use jiff::Timestamp;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn test_push_appends_last() {
        let now = Timestamp::UNIX_EPOCH;
        let mut thread = CommentThread::new();
        for (i, text) in ["a", "b", "c", "b"].into_iter().enumerate() {
            let id = thread.push(text, now);
            assert_eq!(thread.len(), i + 1);
            assert_eq!(thread.iter().last().map(|c| c.id), Some(id));
            assert_eq!(thread.iter().last().map(|c| c.text.as_str()), Some(text));
        }
        assert_eq!(thread.texts(), vec!["a", "b", "c", "b"]);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let now = Timestamp::UNIX_EPOCH;
        let mut thread = CommentThread::new();
        let first = thread.push("a", now);
        assert!(thread.remove(first).is_some());
        let second = thread.push("a", now);
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn test_remove_text() {
        let now = Timestamp::UNIX_EPOCH;
        let mut thread = CommentThread::with_placeholder(now);
        thread.push("Great post!", now);

        assert_eq!(thread.remove_text("missing"), 0);
        assert_eq!(thread.texts(), vec!["", "Great post!"]);

        assert_eq!(thread.remove_text(""), 1);
        assert_eq!(thread.texts(), vec!["Great post!"]);

        thread.push("Great post!", now);
        thread.push("other", now);
        assert_eq!(thread.remove_text("Great post!"), 2);
        assert_eq!(thread.texts(), vec!["other"]);
    }

    #[test]
    fn test_remove_by_id_keeps_duplicates() {
        let now = Timestamp::UNIX_EPOCH;
        let mut thread = CommentThread::new();
        let first = thread.push("same", now);
        let second = thread.push("same", now);

        let removed = thread.remove(first).map(|c| c.id);
        assert_eq!(removed, Some(first));
        assert_eq!(thread.len(), 1);
        assert!(thread.get(second).is_some());

        assert_eq!(thread.remove(first), None);
        assert_eq!(thread.remove(CommentId::default()), None);
        assert_eq!(thread.len(), 1);
    }

    #[test]
    fn test_like_is_per_comment() {
        let now = Timestamp::UNIX_EPOCH;
        let mut thread = CommentThread::new();
        let a = thread.push("a", now);
        let b = thread.push("b", now);

        for n in 1..=5 {
            assert_eq!(thread.like(a), Some(n));
        }
        assert_eq!(thread.likes(a), Some(5));
        assert_eq!(thread.likes(b), Some(0));

        thread.remove(b);
        assert_eq!(thread.like(b), None);
        assert_eq!(thread.likes(a), Some(5));
    }

    #[test]
    fn test_likes_survive_removal_of_neighbours() {
        let now = Timestamp::UNIX_EPOCH;
        let mut thread = CommentThread::with_placeholder(now);
        let liked = thread.push("liked", now);
        thread.like(liked);
        thread.like(liked);

        thread.remove_text("");
        assert_eq!(thread.likes(liked), Some(2));
    }
}
