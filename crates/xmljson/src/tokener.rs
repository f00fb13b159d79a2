//! Character-level reader and lexer for XML text.
//!
//! The [`Tokener`] walks a borrowed string and hands out tokens on demand. It
//! offers raw character access as well, because comments, CDATA sections and
//! bang declarations need a lexer that is looser than [`Tokener::next_token`].

use crate::{Error, Result, Token};

/// Number of characters of consumed text quoted in error messages.
const FRAGMENT_CHARS: usize = 32;

/// A cursor over XML source text.
#[derive(Debug, Clone)]
pub struct Tokener<'a> {
    source: &'a str,

    /// Byte offset of the next unread character.
    pos: usize,

    /// Byte length of the character most recently returned by `next`, or 0
    /// when there is nothing to back up over.
    last_len: usize,
}

/// Characters that end a bare name inside a tag.
fn ends_name(c: char) -> bool {
    matches!(c, '>' | '/' | '=' | '!' | '?' | '[' | ']')
}

/// Characters that may not appear inside a bare name.
fn bad_in_name(c: char) -> bool {
    matches!(c, '<' | '"' | '\'')
}

/// Characters that end a bare run inside a bang declaration.
fn ends_meta(c: char) -> bool {
    matches!(c, '<' | '>' | '/' | '=' | '!' | '?' | '"' | '\'')
}

impl<'a> Tokener<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            last_len: 0,
        }
    }

    /// Are there unread characters left?
    pub fn more(&self) -> bool {
        self.pos < self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.last_len = c.len_utf8();
        self.pos += self.last_len;
        Some(c)
    }

    /// Read one raw character.
    pub fn next(&mut self) -> Result<char> {
        self.bump().ok_or_else(|| Error::UnexpectedEndOfInput {
            fragment: self.fragment(),
        })
    }

    /// Un-read the character returned by the last call to [`Tokener::next`].
    ///
    /// Backing up twice in a row is a no-op the second time.
    pub fn back(&mut self) {
        self.pos -= self.last_len;
        self.last_len = 0;
    }

    /// The tail of the text consumed so far, used to locate errors.
    pub fn fragment(&self) -> String {
        self.fragment_at(self.pos)
    }

    fn fragment_at(&self, pos: usize) -> String {
        let consumed = &self.source[..pos];
        let start = consumed
            .char_indices()
            .rev()
            .nth(FRAGMENT_CHARS - 1)
            .map_or(0, |(i, _)| i);
        consumed[start..].to_string()
    }

    /// Build a syntax error located at the current position.
    pub fn syntax_error(&self, message: impl Into<String>) -> Error {
        Error::syntax(message, self.fragment())
    }

    /// Build a syntax error located at an earlier position `pos`.
    fn syntax_error_at(&self, pos: usize, message: impl Into<String>) -> Error {
        Error::syntax(message, self.fragment_at(pos))
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    /// Advance past the first occurrence of `marker`.
    ///
    /// Returns the text skipped over (excluding the marker) and whether the
    /// marker was found. When it is not found the cursor moves to the end and
    /// the rest of the input is returned.
    pub fn skip_through(&mut self, marker: &str) -> (&'a str, bool) {
        let source = self.source;
        let rest = &source[self.pos..];
        self.last_len = 0;
        match rest.find(marker) {
            Some(i) => {
                self.pos += i + marker.len();
                (&rest[..i], true)
            }
            None => {
                self.pos = self.source.len();
                (rest, false)
            }
        }
    }

    /// Advance past the first occurrence of `marker`, reporting whether it
    /// was found.
    pub fn try_skip_past(&mut self, marker: &str) -> bool {
        self.skip_through(marker).1
    }

    /// Advance past the first occurrence of `marker`, failing if the input
    /// ends first.
    pub fn skip_past(&mut self, marker: &str) -> Result<()> {
        let start = self.pos;
        if self.try_skip_past(marker) {
            Ok(())
        } else {
            Err(self.syntax_error_at(start, format!("Missing '{}'", marker)))
        }
    }

    /// Read the body of a CDATA section up to and past its `]]>` terminator.
    pub fn next_cdata(&mut self) -> Result<String> {
        let start = self.pos;
        match self.skip_through("]]>") {
            (text, true) => Ok(text.to_string()),
            (_, false) => Err(self.syntax_error_at(start, "Unclosed CDATA")),
        }
    }

    /// Read character data up to the next `<`.
    ///
    /// Leading whitespace is skipped and trailing whitespace dropped. Returns
    /// [`Token::Lt`] if a tag starts immediately and `None` at end of input.
    pub fn next_content(&mut self) -> Option<Token> {
        self.skip_whitespace();
        match self.peek()? {
            '<' => {
                self.bump();
                Some(Token::Lt)
            }
            _ => {
                let source = self.source;
                let rest = &source[self.pos..];
                let end = rest.find('<').unwrap_or(rest.len());
                self.pos += end;
                self.last_len = 0;
                Some(Token::Text(rest[..end].trim_end().to_string()))
            }
        }
    }

    /// Read the text of a quoted string whose opening quote was just consumed.
    fn read_quoted(&mut self, quote: char) -> Result<String> {
        let start = self.pos;
        let mut quote_buf = [0u8; 4];
        match self.skip_through(quote.encode_utf8(&mut quote_buf)) {
            (text, true) => Ok(text.to_string()),
            (_, false) => Err(self.syntax_error_at(start, "Unterminated string")),
        }
    }

    /// Read a bare run starting with the already-consumed `first`, stopping
    /// before whitespace or any character for which `stop` holds.
    fn read_bare(&mut self, first: char, stop: fn(char) -> bool) -> Result<String> {
        let mut run = String::new();
        run.push(first);
        while let Some(c) = self.peek() {
            if c.is_whitespace() || stop(c) {
                break;
            }
            if bad_in_name(c) {
                self.bump();
                return Err(self.syntax_error("Bad character in a name"));
            }
            self.bump();
            run.push(c);
        }
        Ok(run)
    }

    /// Read one token of a `<!...>` declaration.
    ///
    /// Only the angle brackets matter to the caller, which balances them;
    /// quoted and bare runs come back as text. Returns `None` at end of input.
    pub fn next_meta(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace();
        let Some(c) = self.bump() else {
            return Ok(None);
        };
        let token = match c {
            '<' | '>' | '/' | '=' | '!' | '?' => Token::marker(c),
            '"' | '\'' => Some(Token::Text(self.read_quoted(c)?)),
            _ => {
                let mut run = String::new();
                run.push(c);
                while let Some(c) = self.peek() {
                    if c.is_whitespace() || ends_meta(c) {
                        break;
                    }
                    self.bump();
                    run.push(c);
                }
                Some(Token::Text(run))
            }
        };
        Ok(token)
    }

    /// Read the next token inside a tag.
    ///
    /// Punctuation comes back as a structural marker, quoted strings and bare
    /// names as text.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();
        let Some(c) = self.bump() else {
            return Err(self.syntax_error("Misshaped element"));
        };
        match c {
            '<' | '>' | '/' | '=' | '!' | '?' => {
                Token::marker(c).ok_or_else(|| self.syntax_error("Misshaped element"))
            }
            '"' | '\'' => Ok(Token::Text(self.read_quoted(c)?)),
            _ => Ok(Token::Text(self.read_bare(c, ends_name)?)),
        }
    }
}
