pub mod use_comment_thread;
