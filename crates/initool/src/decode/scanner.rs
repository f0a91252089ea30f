//! Cursor-driven matchers for the INI grammar.
//!
//! Every `match_*` method either consumes input and returns the match, or
//! returns `None`/`false` with the cursor exactly where it was.

#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

/// Characters allowed anywhere in a bare key.
#[inline]
pub(crate) fn is_key_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.')
}

/// Characters allowed as the first and last character of a bare key.
#[inline]
pub(crate) fn is_key_anchor(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[inline]
fn is_quote(b: u8) -> bool {
    matches!(b, b'"' | b'\'' | b'`')
}

#[inline]
#[cfg(feature = "perf_memchr")]
fn find_newline(b: &[u8]) -> Option<usize> {
    memchr::memchr(b'\n', b)
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn find_newline(b: &[u8]) -> Option<usize> {
    b.iter().position(|&c| c == b'\n')
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// 1-based line number of the cursor.
    pub fn line(&self) -> usize {
        self.src.as_bytes()[..self.pos]
            .iter()
            .filter(|&&c| c == b'\n')
            .count()
            + 1
    }

    fn peek_byte(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.rest().chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Run `f`, rewinding the cursor if it does not match.
    fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.pos;
        let out = f(self);
        if out.is_none() {
            self.pos = start;
        }
        out
    }

    pub fn match_word(&mut self, word: &str) -> bool {
        if self.rest().starts_with(word) {
            self.pos += word.len();
            true
        } else {
            false
        }
    }

    fn skip_line(&mut self) {
        match find_newline(self.rest().as_bytes()) {
            Some(i) => self.pos += i + 1,
            None => self.pos = self.src.len(),
        }
    }

    /// Skip blanks, line breaks, and `;`, `#` or `//` comments.
    pub fn skip_space_and_comment(&mut self) {
        while let Some(b) = self.peek_byte() {
            match b {
                b' ' | b'\t' | b'\r' | b'\n' => self.pos += 1,
                b';' | b'#' => self.skip_line(),
                b'/' if self.rest().starts_with("//") => self.skip_line(),
                _ => break,
            }
        }
    }

    fn skip_blanks(&mut self) {
        while matches!(self.peek_byte(), Some(b' ' | b'\t')) {
            self.pos += 1;
        }
    }

    /// `[` name `]`, with comments and whitespace allowed around each part.
    pub fn match_section(&mut self) -> Option<String> {
        self.attempt(|s| {
            s.skip_space_and_comment();
            if !s.match_word("[") {
                return None;
            }
            s.skip_space_and_comment();
            let name = s.match_key()?;
            s.skip_space_and_comment();
            if !s.match_word("]") {
                return None;
            }
            Some(name)
        })
    }

    pub fn match_key(&mut self) -> Option<String> {
        self.attempt(|s| {
            s.skip_space_and_comment();
            if let Some(quoted) = s.match_string() {
                return Some(quoted);
            }
            s.match_bare_key()
        })
    }

    fn match_bare_key(&mut self) -> Option<String> {
        let bytes = self.rest().as_bytes();
        let len = bytes.iter().take_while(|&&b| is_key_char(b)).count();
        if len == 0 || !is_key_anchor(bytes[0]) || !is_key_anchor(bytes[len - 1]) {
            return None;
        }
        let key = self.rest()[..len].to_string();
        self.pos += len;
        Some(key)
    }

    /// `=` or `:`, after any whitespace and comments.
    pub fn match_assign(&mut self) -> bool {
        self.attempt(|s| {
            s.skip_space_and_comment();
            (s.match_word("=") || s.match_word(":")).then_some(())
        })
        .is_some()
    }

    /// A quoted string, or bare text up to end of line, a comment, or a
    /// quote. Bare text is right-trimmed and must not be empty; the cursor
    /// is left on the terminator.
    pub fn match_value(&mut self) -> Option<String> {
        self.attempt(|s| {
            s.skip_blanks();
            if let Some(quoted) = s.match_string() {
                return Some(quoted);
            }
            let rest = s.rest();
            let bytes = rest.as_bytes();
            let mut end = 0usize;
            while end < bytes.len() {
                match bytes[end] {
                    b'\n' | b'\r' | b';' | b'#' => break,
                    b'/' if bytes.get(end + 1) == Some(&b'/') => break,
                    b if is_quote(b) => break,
                    _ => end += 1,
                }
            }
            s.pos += end;
            let value = rest[..end].trim_end_matches([' ', '\t']);
            if value.is_empty() {
                return None;
            }
            Some(value.to_string())
        })
    }

    /// A string delimited by `"`, `'` or `` ` ``, with backslash escapes.
    /// End of input closes an unterminated string.
    pub fn match_string(&mut self) -> Option<String> {
        let quote = match self.peek_byte() {
            Some(q) if is_quote(q) => q as char,
            _ => return None,
        };
        self.pos += 1;
        let mut buf = String::new();
        while let Some(ch) = self.bump() {
            if ch == quote {
                return Some(buf);
            }
            if ch != '\\' {
                buf.push(ch);
                continue;
            }
            let Some(escaped) = self.bump() else {
                break;
            };
            match escaped {
                'n' => buf.push('\n'),
                't' => buf.push('\t'),
                // \r discards everything read so far, \b the last char
                'r' => buf.clear(),
                'b' => {
                    buf.pop();
                }
                '\n' => self.skip_space_and_comment(),
                '\r' if self.peek_byte() == Some(b'\n') => {
                    self.pos += 1;
                    self.skip_space_and_comment();
                }
                other => buf.push(other),
            }
        }
        Some(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_space_and_comment() {
        let mut s = Scanner::new("  ; one\n# two\r\n// three\n\tkey");
        s.skip_space_and_comment();
        assert_eq!(s.rest(), "key");

        let mut s = Scanner::new("; no newline");
        s.skip_space_and_comment();
        assert!(s.is_at_end());

        let mut s = Scanner::new("/notacomment");
        s.skip_space_and_comment();
        assert_eq!(s.pos(), 0);
    }

    #[test]
    fn test_bare_key_boundaries() {
        for ok in ["a", "abc", "a.b", "a-b", "_x", "x_", "9", "a.b-c_d"] {
            assert_eq!(Scanner::new(ok).match_key().as_deref(), Some(ok), "{ok}");
        }
        for bad in ["-abc", "abc.", ".a", "a-", "", "=x"] {
            let mut s = Scanner::new(bad);
            assert_eq!(s.match_key(), None, "{bad}");
            assert_eq!(s.pos(), 0, "cursor moved for {bad}");
        }
    }

    #[test]
    fn test_quoted_key_accepts_any_text() {
        let mut s = Scanner::new("\"-abc\" = 1");
        assert_eq!(s.match_key().as_deref(), Some("-abc"));
        assert!(s.match_assign());
    }

    #[test]
    fn test_bare_key_stops_at_other_chars() {
        let mut s = Scanner::new("name=1");
        assert_eq!(s.match_key().as_deref(), Some("name"));
        assert_eq!(s.rest(), "=1");
    }

    #[test]
    fn test_match_section() {
        let mut s = Scanner::new("  [ server ] \nhost=x");
        assert_eq!(s.match_section().as_deref(), Some("server"));
        assert_eq!(s.rest(), " \nhost=x");

        let mut s = Scanner::new("[unclosed\nk=v");
        assert_eq!(s.match_section(), None);
        assert_eq!(s.pos(), 0);

        let mut s = Scanner::new("['my section']");
        assert_eq!(s.match_section().as_deref(), Some("my section"));
    }

    #[test]
    fn test_match_assign() {
        assert!(Scanner::new(" = v").match_assign());
        assert!(Scanner::new(": v").match_assign());
        let mut s = Scanner::new(" v");
        assert!(!s.match_assign());
        assert_eq!(s.pos(), 0);
    }

    #[test]
    fn test_bare_value_terminators() {
        let cases = [
            ("plain\nnext", "plain"),
            ("trailing  \t\n", "trailing"),
            ("a b c ; comment", "a b c"),
            ("x#y", "x"),
            ("http://host", "http:"),
            ("half'quoted'", "half"),
            ("last", "last"),
            ("crlf\r\n", "crlf"),
        ];
        for (input, want) in cases {
            assert_eq!(Scanner::new(input).match_value().as_deref(), Some(want), "{input:?}");
        }
    }

    #[test]
    fn test_bare_value_leaves_cursor_on_terminator() {
        let mut s = Scanner::new("v  ; c");
        assert_eq!(s.match_value().as_deref(), Some("v"));
        assert_eq!(s.rest(), "; c");
    }

    #[test]
    fn test_empty_bare_value_fails() {
        for input in ["", "   ", "\nnext=1", " ; comment"] {
            let mut s = Scanner::new(input);
            assert_eq!(s.match_value(), None, "{input:?}");
            assert_eq!(s.pos(), 0);
        }
        assert_eq!(Scanner::new("\"\"").match_value().as_deref(), Some(""));
    }

    #[test]
    fn test_quote_delimiters() {
        assert_eq!(Scanner::new("\"a'b`c\"").match_string().as_deref(), Some("a'b`c"));
        assert_eq!(Scanner::new("'a\"b'").match_string().as_deref(), Some("a\"b"));
        assert_eq!(Scanner::new("`a;b#c`").match_string().as_deref(), Some("a;b#c"));
        assert_eq!(Scanner::new("\"open to the end").match_string().as_deref(), Some("open to the end"));
        assert_eq!(Scanner::new("plain").match_string(), None);
    }

    #[test]
    fn test_escapes() {
        let cases = [
            (r#""a\\b""#, "a\\b"),
            (r#""say \"hi\"""#, "say \"hi\""),
            (r#"'it\'s'"#, "it's"),
            (r#""\`\;\#""#, "`;#"),
            (r#""line1\nline2""#, "line1\nline2"),
            (r#""col\tcol""#, "col\tcol"),
            (r#""discard\rkept""#, "kept"),
            (r#""abc\bd""#, "abd"),
            (r#""\b\bx""#, "x"),
            (r#""\q""#, "q"),
            ("\"trailing\\", "trailing"),
        ];
        for (input, want) in cases {
            assert_eq!(Scanner::new(input).match_string().as_deref(), Some(want), "{input}");
        }
    }

    #[test]
    fn test_line_continuation() {
        let input = "\"first \\\n    ; skipped comment\n   second\"";
        assert_eq!(Scanner::new(input).match_string().as_deref(), Some("first second"));

        let input = "\"a\\\r\n  b\"";
        assert_eq!(Scanner::new(input).match_string().as_deref(), Some("ab"));
    }

    #[test]
    fn test_backspace_removes_whole_char() {
        assert_eq!(Scanner::new("\"héé\\b\"").match_string().as_deref(), Some("hé"));
    }

    #[test]
    fn test_line_number() {
        let mut s = Scanner::new("a\nb\nc");
        assert_eq!(s.line(), 1);
        s.skip_line();
        s.skip_line();
        assert_eq!(s.line(), 3);
    }
}
