//! The parsed commit message value.

use std::fmt;

use crate::lines::Lines;

const LINE_SEPARATOR: &str = "\n";

/// A commit message split into raw lines and comment-free content.
///
/// Everything is derived once, when the message is created. Accessors only
/// hand out views of that state, so a `CommitMessage` never changes after
/// construction.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CommitMessage {
    raw: String,
    lines: Vec<String>,
    comment_char: Option<char>,
    content_lines: Vec<String>,
    content: String,
    body: String,
}

impl CommitMessage {
    /// Create a commit message from its raw text.
    ///
    /// `comment_char` marks lines to leave out of the content. Pass `None`
    /// for messages that cannot carry comments, like one read from a commit
    /// object, and `Some('#')` (see [`DEFAULT_COMMENT_CHAR`]) for the text of
    /// a `commit-msg` hook.
    ///
    /// [`DEFAULT_COMMENT_CHAR`]: crate::DEFAULT_COMMENT_CHAR
    pub fn new(content: impl Into<String>, comment_char: Option<char>) -> Self {
        let raw = content.into();
        let lines: Vec<String> = Lines::new(&raw).map(str::to_owned).collect();
        let content_lines: Vec<String> = lines
            .iter()
            .filter(|line| !is_comment(line, comment_char))
            .cloned()
            .collect();
        let content = content_lines.join(LINE_SEPARATOR);
        let body = body_lines(&content_lines).join(LINE_SEPARATOR);

        Self {
            raw,
            lines,
            comment_char,
            content_lines,
            content,
            body,
        }
    }

    /// Whether the message has no content once comments are removed.
    ///
    /// A message made up only of comment lines is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The comment-free message, lines joined with `\n`.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The message exactly as it was given.
    pub fn raw_content(&self) -> &str {
        &self.raw
    }

    /// All lines of the message, comments included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines in the message, comments included.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The raw line at `index`, or `""` if there is no such line.
    pub fn line(&self, index: usize) -> &str {
        self.lines.get(index).map_or("", String::as_str)
    }

    /// The lines left after dropping comments.
    pub fn content_lines(&self) -> &[String] {
        &self.content_lines
    }

    /// Number of lines left after dropping comments.
    pub fn content_line_count(&self) -> usize {
        self.content_lines.len()
    }

    /// The first content line, or `""` for an empty message.
    pub fn subject(&self) -> &str {
        self.content_lines.first().map_or("", String::as_str)
    }

    /// The body, lines joined with `\n`.
    ///
    /// See [`CommitMessage::body_lines`].
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Content lines from the third on.
    ///
    /// The subject and the line following it, normally blank, are skipped.
    /// Messages with fewer than three content lines have no body.
    pub fn body_lines(&self) -> &[String] {
        body_lines(&self.content_lines)
    }

    /// The character marking comment lines, if any.
    pub fn comment_char(&self) -> Option<char> {
        self.comment_char
    }
}

fn is_comment(line: &str, comment_char: Option<char>) -> bool {
    match (line.chars().next(), comment_char) {
        (Some(first), Some(comment_char)) => first == comment_char,
        _ => false,
    }
}

fn body_lines(content_lines: &[String]) -> &[String] {
    content_lines.get(2..).unwrap_or_default()
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content())
    }
}

impl From<String> for CommitMessage {
    fn from(content: String) -> Self {
        Self::new(content, None)
    }
}

impl From<&str> for CommitMessage {
    fn from(content: &str) -> Self {
        Self::new(content, None)
    }
}
