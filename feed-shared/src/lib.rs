pub mod datefmt;
pub mod post;
pub mod settings;
pub mod state;
pub mod thread;

pub use valid::proccess_comment;

pub mod valid {
    use tracing::trace;

    /// Custom validity message shown by the comment textarea when submitted empty.
    pub const COMMENT_REQUIRED_MSG: &str = "Este campo é obrigatório!";

    pub fn proccess_comment<S: AsRef<str>>(comment: S) -> Result<String, String> {
        let mut errors = String::new();
        let comment = comment.as_ref().to_string();
        if comment.is_smaller_than(1) {
            errors += COMMENT_REQUIRED_MSG;
            errors += "\n";
        }

        if errors.is_empty() {
            Ok(comment)
        } else {
            let _ = errors.pop();
            trace!("errors {errors}");
            Err(errors)
        }
    }

    /// Message for the textarea's custom validity, `None` when the draft is acceptable.
    pub fn comment_validity<S: AsRef<str>>(comment: S) -> Option<String> {
        proccess_comment(comment).err()
    }

    pub trait Validator {
        fn is_smaller_than(&self, size: usize) -> bool;
    }

    impl<S: AsRef<str>> Validator for S {
        fn is_smaller_than(&self, size: usize) -> bool {
            self.as_ref().len() < size
        }
    }

}
