//! A parser for raw git commit messages.
//!
//! A [`CommitMessage`] splits the text git hands to a `commit-msg` hook, or
//! the message stored in a commit object, into lines and drops comment lines
//! to get at the actual content: the subject and the body.
//!
//! # Example
//!
//! ```rust
//! use commit_message::CommitMessage;
//! use indoc::indoc;
//!
//! let message = CommitMessage::new(
//!     indoc!("
//!         Add usage example to the crate docs
//!
//!         Having this example helps people understand how to use the
//!         parser.
//!         ## Please enter the commit message for your changes. Lines starting
//!         ## with '#' will be ignored, and an empty message aborts the commit.
//!     "),
//!     Some(commit_message::DEFAULT_COMMENT_CHAR),
//! );
//!
//! // The subject is the first line that is not a comment.
//! assert_eq!(message.subject(), "Add usage example to the crate docs");
//!
//! // The body starts after the blank line following the subject.
//! assert!(message.body().starts_with("Having this example"));
//!
//! // Comment lines are gone from the content, but still in the raw lines.
//! assert!(!message.content().contains("Please enter"));
//! assert!(message.line(4).starts_with("# Please enter"));
//! assert_eq!(message.line_count(), 7);
//! assert_eq!(message.content_line_count(), 5);
//! ```
//!
//! Inside a `commit-msg` hook, the message is read from the file git passes
//! as the first argument:
//!
//! ```rust,no_run
//! use commit_message::CommitMessage;
//!
//! # fn main() -> Result<(), commit_message::Error> {
//! let message = CommitMessage::from_file(".git/COMMIT_EDITMSG")?;
//! if message.is_empty() {
//!     eprintln!("aborting commit due to empty commit message");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod lines;
mod message;
mod source;

pub use error::{Error, ErrorKind};
pub use message::CommitMessage;
pub use source::{read_message, FileSystem, MessageSource};

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

/// The comment character git uses unless `core.commentChar` says otherwise.
pub const DEFAULT_COMMENT_CHAR: char = '#';
