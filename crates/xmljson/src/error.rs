//! Error types for XML/JSON conversion.

use thiserror::Error;

/// Result type alias for xmljson operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting XML text to a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The text is not XML the converter can make sense of.
    ///
    /// `fragment` is the tail of the text consumed before the error was
    /// detected, so the message can point at the offending spot without
    /// tracking positions.
    #[error("{message} near '{fragment}'")]
    Syntax { message: String, fragment: String },

    /// The character reader ran out of input.
    ///
    /// The parse entry points never return this variant; they convert it to
    /// [`Error::Syntax`] via [`Error::into_syntax`].
    #[error("Unexpected end of input near '{fragment}'")]
    UnexpectedEndOfInput { fragment: String },

    /// A second top-level element was found while parsing in single-root mode.
    #[error("Multiple root elements: found <{name}> after the document element")]
    MultipleRoots { name: String },
}

impl Error {
    pub(crate) fn syntax(message: impl Into<String>, fragment: impl Into<String>) -> Self {
        Error::Syntax {
            message: message.into(),
            fragment: fragment.into(),
        }
    }

    /// Surface reader-level end-of-input as a syntax error.
    pub fn into_syntax(self) -> Self {
        match self {
            Error::UnexpectedEndOfInput { fragment } => Error::Syntax {
                message: "Unexpected end of input".to_string(),
                fragment,
            },
            other => other,
        }
    }

    /// The error message without the fragment.
    pub fn message(&self) -> String {
        match self {
            Error::Syntax { message, .. } => message.clone(),
            Error::UnexpectedEndOfInput { .. } => "Unexpected end of input".to_string(),
            Error::MultipleRoots { name } => {
                format!("Multiple root elements: found <{}> after the document element", name)
            }
        }
    }
}
