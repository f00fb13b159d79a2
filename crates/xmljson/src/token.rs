//! Lexical tokens produced by the [`Tokener`](crate::Tokener).

use std::fmt;

/// A lexical token.
///
/// Structural markers are distinct variants so that "is this punctuation or
/// text" is answered by the type, never by comparing payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `&`
    Amp,
    /// `'`
    Apos,
    /// `!`
    Bang,
    /// `=`
    Eq,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `?`
    Quest,
    /// `"`
    Quot,
    /// `/`
    Slash,
    /// A tag name, attribute name, attribute value, or text run.
    Text(String),
}

impl Token {
    /// The structural marker for a punctuation character, if it is one.
    pub fn marker(c: char) -> Option<Token> {
        match c {
            '&' => Some(Token::Amp),
            '\'' => Some(Token::Apos),
            '!' => Some(Token::Bang),
            '=' => Some(Token::Eq),
            '>' => Some(Token::Gt),
            '<' => Some(Token::Lt),
            '?' => Some(Token::Quest),
            '"' => Some(Token::Quot),
            '/' => Some(Token::Slash),
            _ => None,
        }
    }

    /// The character a structural marker stands for.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Token::Amp => Some('&'),
            Token::Apos => Some('\''),
            Token::Bang => Some('!'),
            Token::Eq => Some('='),
            Token::Gt => Some('>'),
            Token::Lt => Some('<'),
            Token::Quest => Some('?'),
            Token::Quot => Some('"'),
            Token::Slash => Some('/'),
            Token::Text(_) => None,
        }
    }

    /// True if this is a text token with exactly the given payload.
    pub fn is_text_eq(&self, s: &str) -> bool {
        matches!(self, Token::Text(t) if t == s)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(s) => f.write_str(s),
            marker => match marker.as_char() {
                Some(c) => write!(f, "{}", c),
                None => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_round_trip() {
        for c in ['&', '\'', '!', '=', '>', '<', '?', '"', '/'] {
            let token = Token::marker(c).unwrap();
            assert_eq!(token.as_char(), Some(c));
            assert!(!matches!(token, Token::Text(_)));
        }
        assert_eq!(Token::marker('a'), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Slash.to_string(), "/");
        assert_eq!(Token::Text("name".to_string()).to_string(), "name");
        assert!(Token::Text("CDATA".to_string()).is_text_eq("CDATA"));
        assert!(!Token::Gt.is_text_eq(">"));
    }
}
