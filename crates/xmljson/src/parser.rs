//! XML parser that builds a [`TreeNode`] from a [`Tokener`].
//!
//! Elements are tracked on an explicit stack of frames rather than by native
//! recursion. Nesting is still capped by [`ParseOptions::max_depth`], since the
//! finished tree is dropped and serialized recursively.

use crate::context::{ParseContext, ParseOptions, Warning};
use crate::value::CONTENT_KEY;
use crate::{Error, Result, Token, Tokener, TreeNode, Value, coerce};

/// Parse XML text into a tree.
///
/// Every top-level element is accumulated into the returned node, keyed by
/// its tag name.
///
/// # Example
///
/// ```rust
/// use xmljson::{parse, Value};
///
/// let tree = parse("<a><b>1</b><b>2</b></a>").unwrap();
/// let a = tree.get("a").and_then(Value::as_node).unwrap();
/// assert_eq!(a.get("b"), Some(&Value::List(vec![Value::from(1), Value::from(2)])));
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the text is not XML the converter can read.
pub fn parse(content: &str) -> Result<TreeNode> {
    parse_impl(content, ParseOptions::default(), None)
}

/// Parse XML text with explicit options.
pub fn parse_with_options(content: &str, options: &ParseOptions) -> Result<TreeNode> {
    parse_impl(content, *options, None)
}

/// Parse XML text using the options in `ctx`, recording warnings there.
pub fn parse_with_context(content: &str, ctx: &mut ParseContext) -> Result<TreeNode> {
    let options = *ctx.options();
    parse_impl(content, options, Some(ctx))
}

fn parse_impl(
    content: &str,
    options: ParseOptions,
    ctx: Option<&mut ParseContext>,
) -> Result<TreeNode> {
    tracing::debug!(bytes = content.len(), "Parsing XML document");

    let mut parser = XmlParser::new(content, options);
    let result = parser.parse().map_err(Error::into_syntax);

    if let Some(ctx) = ctx {
        for warning in parser.warnings {
            ctx.add_warning(warning);
        }
    }

    match &result {
        Ok(root) => tracing::debug!(keys = root.len(), "Parsed XML document"),
        Err(err) => tracing::debug!(error = %err, "XML document rejected"),
    }
    result
}

/// Internal parser state.
struct XmlParser<'a> {
    tokener: Tokener<'a>,
    options: ParseOptions,
    warnings: Vec<Warning>,
}

/// An element whose content is still being read.
struct Frame {
    name: String,
    node: TreeNode,
}

impl Frame {
    /// Add the finished element to `parent`.
    ///
    /// An element with nothing in it becomes the empty string, and one that
    /// holds only text becomes that text.
    fn close_into(self, parent: &mut TreeNode) {
        let value = if self.node.is_empty() {
            Value::empty()
        } else {
            self.node.into_content().unwrap_or_else(Value::Node)
        };
        parent.accumulate(self.name, value);
    }
}

/// What reading one tag produced.
enum Tag {
    /// A comment, processing instruction, declaration or CDATA section.
    Skipped,

    /// A self-closing element, already added to its parent.
    Empty { name: String },

    /// A start tag whose content comes next.
    Open(Frame),

    /// The end tag of the enclosing element.
    Close,
}

impl<'a> XmlParser<'a> {
    fn new(source: &'a str, options: ParseOptions) -> Self {
        Self {
            tokener: Tokener::new(source),
            options,
            warnings: Vec::new(),
        }
    }

    fn parse(&mut self) -> Result<TreeNode> {
        let mut root = TreeNode::new();
        let mut roots = 0usize;

        while self.tokener.more() {
            let (skipped, found) = self.tokener.skip_through("<");
            let skipped = skipped.trim();
            if !skipped.is_empty() {
                self.warnings.push(Warning::DiscardedText {
                    text: skipped.to_string(),
                });
            }
            if !found {
                break;
            }

            match self.parse_tag(&mut root, None)? {
                Tag::Skipped | Tag::Close => {}
                Tag::Empty { name } => self.count_root(&mut roots, &name)?,
                Tag::Open(frame) => {
                    self.count_root(&mut roots, &frame.name)?;
                    self.parse_content(frame, &mut root)?;
                }
            }
        }

        if roots > 1 {
            self.warnings.push(Warning::MultipleRoots { count: roots });
        }
        Ok(root)
    }

    fn count_root(&self, roots: &mut usize, name: &str) -> Result<()> {
        *roots += 1;
        if self.options.single_root && *roots > 1 {
            return Err(Error::MultipleRoots {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn coerce_value(&self, raw: &str) -> Value {
        if self.options.keep_strings {
            Value::String(raw.to_string())
        } else {
            coerce::coerce(raw)
        }
    }

    /// Read the content of `first` and everything nested in it, then add it
    /// to `root`.
    fn parse_content(&mut self, first: Frame, root: &mut TreeNode) -> Result<()> {
        tracing::trace!(element = %first.name, "Open element");
        let mut stack = Vec::new();
        self.enter(&mut stack, first)?;

        while let Some(top) = stack.last_mut() {
            let Some(token) = self.tokener.next_content() else {
                return Err(self
                    .tokener
                    .syntax_error(format!("Unclosed tag {}", top.name)));
            };

            match token {
                Token::Text(text) => {
                    if !text.is_empty() {
                        let value = self.coerce_value(&text);
                        top.node.accumulate(CONTENT_KEY, value);
                    }
                }
                Token::Lt => {
                    let Frame { name, node } = top;
                    match self.parse_tag(node, Some(name.as_str()))? {
                        Tag::Skipped | Tag::Empty { .. } => {}
                        Tag::Open(child) => {
                            tracing::trace!(element = %child.name, depth = stack.len(), "Open element");
                            self.enter(&mut stack, child)?;
                        }
                        Tag::Close => {
                            if let Some(done) = stack.pop() {
                                tracing::trace!(element = %done.name, "Close element");
                                let parent = match stack.last_mut() {
                                    Some(frame) => &mut frame.node,
                                    None => &mut *root,
                                };
                                done.close_into(parent);
                            }
                        }
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Push `frame` unless that would nest deeper than `max_depth`.
    fn enter(&self, stack: &mut Vec<Frame>, frame: Frame) -> Result<()> {
        if stack.len() >= self.options.max_depth {
            return Err(self.tokener.syntax_error("Nesting too deep"));
        }
        stack.push(frame);
        Ok(())
    }

    /// Read one tag whose `<` has been consumed.
    ///
    /// `expected` is the name of the enclosing element, if any; only its end
    /// tag may appear here.
    fn parse_tag(&mut self, parent: &mut TreeNode, expected: Option<&str>) -> Result<Tag> {
        match self.tokener.next_token()? {
            Token::Bang => self.parse_bang(parent),
            Token::Quest => {
                self.tokener.skip_past("?>")?;
                Ok(Tag::Skipped)
            }
            Token::Slash => self.parse_close(expected),
            Token::Text(name) => self.parse_start(name, parent),
            _ => Err(self.tokener.syntax_error("Misshaped tag")),
        }
    }

    /// Comments, CDATA sections and other `<!` declarations.
    fn parse_bang(&mut self, parent: &mut TreeNode) -> Result<Tag> {
        let c = self.tokener.next()?;
        if c == '-' {
            if self.tokener.next()? == '-' {
                self.tokener.skip_past("-->")?;
                return Ok(Tag::Skipped);
            }
            self.tokener.back();
        } else if c == '[' {
            let token = self.tokener.next_token()?;
            if token.is_text_eq("CDATA") && self.tokener.next()? == '[' {
                let text = self.tokener.next_cdata()?;
                if !text.is_empty() {
                    parent.accumulate(CONTENT_KEY, Value::String(text));
                }
                return Ok(Tag::Skipped);
            }
            return Err(self.tokener.syntax_error("Expected 'CDATA['"));
        }

        let mut depth = 1usize;
        while depth > 0 {
            match self.tokener.next_meta()? {
                None => return Err(self.tokener.syntax_error("Missing '>' after '<!'.")),
                Some(Token::Lt) => depth += 1,
                Some(Token::Gt) => depth -= 1,
                Some(_) => {}
            }
        }
        Ok(Tag::Skipped)
    }

    fn parse_close(&mut self, expected: Option<&str>) -> Result<Tag> {
        let name = self.tokener.next_token()?;
        let Some(expected) = expected else {
            return Err(self
                .tokener
                .syntax_error(format!("Mismatched close tag {}", name)));
        };
        if !name.is_text_eq(expected) {
            return Err(self
                .tokener
                .syntax_error(format!("Mismatched {} and {}", expected, name)));
        }
        if self.tokener.next_token()? != Token::Gt {
            return Err(self.tokener.syntax_error("Misshaped close tag"));
        }
        Ok(Tag::Close)
    }

    /// A start tag or self-closing tag named `name`: its attributes and the
    /// terminating `>` or `/>`.
    fn parse_start(&mut self, name: String, parent: &mut TreeNode) -> Result<Tag> {
        let mut node = TreeNode::new();
        let mut pending: Option<Token> = None;

        let terminator = loop {
            let token = match pending.take() {
                Some(token) => token,
                None => self.tokener.next_token()?,
            };
            let key = match token {
                Token::Text(key) => key,
                other => break other,
            };

            let after = self.tokener.next_token()?;
            if after == Token::Eq {
                let Token::Text(raw) = self.tokener.next_token()? else {
                    return Err(self.tokener.syntax_error("Missing value"));
                };
                let value = self.coerce_value(&raw);
                node.accumulate(key, value);
            } else {
                // A bare attribute; the token after it starts the next step
                node.accumulate(key, Value::empty());
                pending = Some(after);
            }
        };

        match terminator {
            Token::Slash => {
                if self.tokener.next_token()? != Token::Gt {
                    return Err(self.tokener.syntax_error("Misshaped tag"));
                }
                tracing::trace!(element = %name, "Empty element");
                let value = if node.is_empty() {
                    Value::empty()
                } else {
                    Value::Node(node)
                };
                parent.accumulate(name.clone(), value);
                Ok(Tag::Empty { name })
            }
            Token::Gt => Ok(Tag::Open(Frame { name, node })),
            _ => Err(self.tokener.syntax_error("Misshaped tag")),
        }
    }
}
