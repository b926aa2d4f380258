use winnow::combinator::{alt, trace};
use winnow::token::take_till;
use winnow::{ModalResult, Parser};

// <CR>              ::= "0x000D"
// <LF>              ::= "0x000A"
fn is_line_ending(c: char) -> bool {
    c == '\n' || c == '\r'
}

// <line>            ::= <any UTF8-octets except CR or LF>*
fn line<'a>(i: &mut &'a str) -> ModalResult<&'a str> {
    trace("line", take_till(0.., is_line_ending)).parse_next(i)
}

// <terminator>      ::= <CR>, <LF> | <CR> | <LF>
fn terminator<'a>(i: &mut &'a str) -> ModalResult<&'a str> {
    trace("terminator", alt(("\r\n", "\r", "\n"))).parse_next(i)
}

/// Iterates the lines of a commit message, without their terminators.
///
/// Any of `\r\n`, `\r` and `\n` ends a line, with `\r\n` taking precedence
/// over a lone `\r`. Empty input has no lines; otherwise `n` terminators
/// produce `n + 1` lines, so a trailing terminator yields a final `""`.
#[derive(Clone, Debug)]
pub(crate) struct Lines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        let rest = (!input.is_empty()).then_some(input);
        Self { rest }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let mut i = self.rest?;
        let text = line.parse_next(&mut i).ok()?;
        self.rest = terminator.parse_next(&mut i).ok().map(|_| i);
        Some(text)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn lines(input: &str) -> Vec<&str> {
        Lines::new(input).collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(lines(""), Vec::<&str>::new());
    }

    #[test]
    fn test_single_line() {
        assert_eq!(lines("foo"), vec!["foo"]);
        assert_eq!(lines(" foo bar "), vec![" foo bar "]);
        assert_eq!(lines("💃🏽"), vec!["💃🏽"]);
    }

    #[test]
    fn test_trailing_terminator() {
        assert_eq!(lines("foo\n"), vec!["foo", ""]);
        assert_eq!(lines("foo\r\n"), vec!["foo", ""]);
        assert_eq!(lines("foo\r"), vec!["foo", ""]);
        assert_eq!(lines("\n"), vec!["", ""]);
    }

    #[test]
    fn test_mixed_terminators() {
        assert_eq!(lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_crlf_is_a_single_terminator() {
        assert_eq!(lines("a\r\n\r\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_lf_cr_is_two_terminators() {
        assert_eq!(lines("a\n\rb"), vec!["a", "", "b"]);
        assert_eq!(lines("a\r\rb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(lines("subject\n\nbody"), vec!["subject", "", "body"]);
        assert_eq!(lines("\n\n\n"), vec!["", "", "", ""]);
    }
}
