//! All errors related to loading commit messages.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// The error returned when a commit message cannot be loaded.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,

    path: Option<PathBuf>,
    source: Option<io::Error>,
}

impl Error {
    /// Create a new error from a `ErrorKind`.
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: None,
            source: None,
        }
    }

    pub(crate) fn file_not_found(path: &Path) -> Self {
        Self::new(ErrorKind::FileNotFound).set_path(path)
    }

    pub(crate) fn with_io(path: &Path, err: io::Error) -> Self {
        Self {
            source: Some(err),
            ..Self::new(ErrorKind::Io).set_path(path)
        }
    }

    pub(crate) fn set_path(mut self, path: &Path) -> Self {
        self.path = Some(path.to_owned());
        self
    }

    /// The kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The commit message file the error relates to.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)?;
        if let Some(path) = &self.path {
            write!(f, ": {}", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

/// All possible error kinds returned when loading a commit message.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// No commit message file exists at the given path.
    FileNotFound,

    /// The commit message file exists but could not be read.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::FileNotFound => f.write_str("commit message file not found"),
            ErrorKind::Io => f.write_str("failed to read commit message file"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_file_not_found_display() {
        let err = Error::file_not_found(Path::new(".git/COMMIT_EDITMSG"));

        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.path(), Some(Path::new(".git/COMMIT_EDITMSG")));
        assert_eq!(
            err.to_string(),
            "commit message file not found: .git/COMMIT_EDITMSG"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_keeps_source() {
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = Error::with_io(Path::new("msg"), io);

        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.to_string(), "failed to read commit message file: msg");
        assert_eq!(err.source().unwrap().to_string(), "denied");
    }

    #[test]
    fn test_without_path() {
        let err = Error::new(ErrorKind::Io);

        assert_eq!(err.path(), None);
        assert_eq!(err.to_string(), "failed to read commit message file");
    }
}
