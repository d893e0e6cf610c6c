//! The primitive-write classifier.
//!
//! A write move may add exactly one statement, and that statement must be
//! primitive: no loop, no branch, no literal collection, no class or
//! function. Anything compound has a card for it and must be earned through
//! a consume move instead.

use tracing::debug;

use crate::cards::MatchError;
use crate::cards::patterns::COMPOUND_PATTERNS;
use crate::parse::{ParseError, SourceParser};

/// Whether `code` is a single primitive statement.
///
/// Returns `Ok(false)` when the fragment has more than one top-level
/// statement, when any compound pattern matches, or when a pattern fails
/// with a reference-resolution error (conservative rejection). Other pattern
/// failures are swallowed and classification continues. A parse failure
/// propagates; the caller's policy decides what it means.
pub fn is_primitive(parser: &dyn SourceParser, code: &str) -> Result<bool, ParseError> {
    let fragment = parser.parse(code)?;

    if fragment.statement_count() > 1 {
        return Ok(false);
    }

    for (name, pattern) in COMPOUND_PATTERNS {
        match pattern(&fragment) {
            Ok(true) => return Ok(false),
            Ok(false) => {}
            Err(MatchError::ReferenceResolution { symbol }) => {
                debug!(pattern = name, symbol, "unresolved reference; rejecting write");
                return Ok(false);
            }
            Err(err) => {
                debug!(pattern = name, error = %err, "pattern failed; treating as no match");
            }
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::JsParser;

    fn classify(code: &str) -> Result<bool, ParseError> {
        is_primitive(&JsParser::new(), code)
    }

    #[test]
    fn a_single_assignment_is_primitive() {
        assert_eq!(classify("let b = 2;"), Ok(true));
    }

    #[test]
    fn a_call_statement_is_primitive() {
        assert_eq!(classify("console.log(total);"), Ok(true));
    }

    #[test]
    fn an_empty_addition_is_primitive() {
        assert_eq!(classify(""), Ok(true));
    }

    #[test]
    fn two_statements_are_not_primitive() {
        assert_eq!(classify("let a = 1;\nlet b = 2;"), Ok(false));
    }

    #[test]
    fn compound_constructs_are_not_primitive() {
        assert_eq!(classify("for (let i = 0; i < 3; i++) {}"), Ok(false));
        assert_eq!(classify("while (x) { y(); }"), Ok(false));
        assert_eq!(classify("if (x) { y(); }"), Ok(false));
        assert_eq!(classify("let m = a > b ? a : b;"), Ok(false));
        assert_eq!(classify("let xs = [1, 2];"), Ok(false));
        assert_eq!(classify("let h = { k: 1 };"), Ok(false));
        assert_eq!(classify("class C {}"), Ok(false));
        assert_eq!(classify("switch (x) { default: }"), Ok(false));
        assert_eq!(classify("function f() {}"), Ok(false));
        assert_eq!(classify("const f = () => 1;"), Ok(false));
    }

    #[test]
    fn unparseable_code_propagates_the_parse_error() {
        assert!(classify("let a = ;;(").is_err());
    }
}
