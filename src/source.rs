//! Loading commit messages from files.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, trace};

use crate::{CommitMessage, Error, DEFAULT_COMMENT_CHAR};

/// Where commit message files are read from.
///
/// [`FileSystem`] is the real thing; tests and embedders can supply their
/// own source to keep message loading off the disk.
pub trait MessageSource {
    /// Whether a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file at `path`.
    fn read_all(&self, path: &Path) -> io::Result<String>;
}

/// Reads commit messages through [`std::fs`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSystem;

impl MessageSource for FileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_all(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

impl<S: MessageSource + ?Sized> MessageSource for &S {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_all(&self, path: &Path) -> io::Result<String> {
        (**self).read_all(path)
    }
}

/// Load the commit message stored at `path`.
///
/// # Errors
///
/// Returns [`ErrorKind::FileNotFound`] without attempting a read when the
/// file does not exist, and [`ErrorKind::Io`] when it exists but cannot be
/// read. A file that is not valid UTF-8, such as a message written with a
/// Latin-1 `i18n.commitEncoding`, is also [`ErrorKind::Io`], with an
/// [`io::ErrorKind::InvalidData`] source.
///
/// [`ErrorKind::FileNotFound`]: crate::ErrorKind::FileNotFound
/// [`ErrorKind::Io`]: crate::ErrorKind::Io
pub fn read_message<S: MessageSource + ?Sized>(
    source: &S,
    path: impl AsRef<Path>,
    comment_char: Option<char>,
) -> Result<CommitMessage, Error> {
    let path = path.as_ref();
    if !source.exists(path) {
        debug!(path = %path.display(), "commit message file not found");
        return Err(Error::file_not_found(path));
    }

    debug!(path = %path.display(), "reading commit message");
    let raw = source
        .read_all(path)
        .map_err(|err| Error::with_io(path, err))?;
    let message = CommitMessage::new(raw, comment_char);
    trace!(
        lines = message.line_count(),
        content_lines = message.content_line_count(),
        "parsed commit message"
    );
    Ok(message)
}

impl CommitMessage {
    /// Load a commit message file, such as the one handed to a `commit-msg`
    /// hook, treating lines starting with [`DEFAULT_COMMENT_CHAR`] as
    /// comments.
    ///
    /// # Errors
    ///
    /// See [`read_message`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        read_message(&FileSystem, path, Some(DEFAULT_COMMENT_CHAR))
    }

    /// Load a commit message file with an explicit comment character.
    ///
    /// # Errors
    ///
    /// See [`read_message`].
    pub fn from_file_with_comment_char(
        path: impl AsRef<Path>,
        comment_char: Option<char>,
    ) -> Result<Self, Error> {
        read_message(&FileSystem, path, comment_char)
    }
}
