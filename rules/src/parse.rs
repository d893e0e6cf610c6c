//! Source parsing as an injected capability.
//!
//! Matchers and the primitive-write classifier never touch the underlying
//! grammar directly: they see a [`Fragment`] produced by a [`SourceParser`].
//! The production parser wraps tree-sitter with the JavaScript grammar (the
//! language of the shared editor buffer); tests can substitute their own
//! implementation without touching matcher logic.

use std::fmt;

use thiserror::Error;
use tree_sitter::{Language, Node, Parser, Tree};

/// Why a fragment could not be turned into a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The grammar could not be loaded into the parser. Only happens when
    /// the grammar crate and the tree-sitter runtime disagree on ABI.
    #[error("failed to load grammar: {0}")]
    Grammar(String),
    /// The fragment is not syntactically valid.
    #[error("fragment is not syntactically valid")]
    Syntax,
}

/// One-operation parsing capability: source text in, syntax tree out.
pub trait SourceParser {
    fn parse(&self, code: &str) -> Result<Fragment, ParseError>;
}

/// A successfully parsed source fragment.
///
/// Owns the source text and its tree; lifetime is scoped to a single
/// validation call. Node access stays inside this crate; callers only ever
/// see booleans derived from it.
pub struct Fragment {
    source: String,
    tree: Tree,
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fragment")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl Fragment {
    pub(crate) fn new(source: String, tree: Tree) -> Self {
        Self { source, tree }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Top-level statements of the fragment, in document order. Comments and
    /// shebang lines are not statements.
    pub(crate) fn top_level_statements(&self) -> Vec<Node<'_>> {
        let root = self.root();
        let mut cursor = root.walk();
        root.named_children(&mut cursor)
            .filter(|node| node.kind() != "comment" && node.kind() != "hash_bang_line")
            .collect()
    }

    /// Number of top-level statements.
    #[must_use]
    pub fn statement_count(&self) -> usize {
        self.top_level_statements().len()
    }

    /// The source text of `node`, or `None` if its byte range is somehow not
    /// valid UTF-8 (cannot happen for trees built from `&str` input).
    pub(crate) fn text_of(&self, node: Node<'_>) -> Option<&str> {
        node.utf8_text(self.source.as_bytes()).ok()
    }
}

/// Production parser: tree-sitter with the JavaScript grammar.
///
/// Stateless; a fresh tree-sitter parser is configured per call so parsed
/// trees never outlive the validation they belong to.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsParser;

impl JsParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SourceParser for JsParser {
    fn parse(&self, code: &str) -> Result<Fragment, ParseError> {
        let language = Language::new(tree_sitter_javascript::LANGUAGE);
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|err| ParseError::Grammar(err.to_string()))?;

        // tree-sitter is error-tolerant; the engine is not. A tree containing
        // error or missing nodes is treated as a failed parse so the fail-open
        // policy upstream can decide what to do with it.
        let tree = parser.parse(code, None).ok_or(ParseError::Syntax)?;
        if tree.root_node().has_error() {
            return Err(ParseError::Syntax);
        }

        Ok(Fragment::new(code.to_string(), tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_simple_statement() {
        let parser = JsParser::new();
        let fragment = parser.parse("let a = 1;").expect("valid fragment");
        assert_eq!(fragment.statement_count(), 1);
    }

    #[test]
    fn empty_input_parses_with_no_statements() {
        let parser = JsParser::new();
        let fragment = parser.parse("").expect("empty fragment");
        assert_eq!(fragment.statement_count(), 0);
    }

    #[test]
    fn counts_multiple_statements() {
        let parser = JsParser::new();
        let fragment = parser
            .parse("let a = 1;\nlet b = 2;\nlet c = 3;")
            .expect("valid fragment");
        assert_eq!(fragment.statement_count(), 3);
    }

    #[test]
    fn comments_are_not_statements() {
        let parser = JsParser::new();
        let fragment = parser
            .parse("// setup\nlet a = 1;")
            .expect("valid fragment");
        assert_eq!(fragment.statement_count(), 1);
    }

    #[test]
    fn truncated_syntax_is_a_parse_error() {
        let parser = JsParser::new();
        let result = parser.parse("for (let i = 0; i <");
        assert!(matches!(result, Err(ParseError::Syntax)));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let parser = JsParser::new();
        assert!(parser.parse("let let let = = ;;;{").is_err());
    }
}
