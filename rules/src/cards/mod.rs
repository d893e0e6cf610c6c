//! The card registry.
//!
//! Each [`CardKind`] maps to exactly one [`CardSpec`]: static presentation
//! metadata (title, skeleton, example) plus the structural matcher that
//! decides whether a code fragment demonstrates the construct. Dispatch is an
//! exhaustive `match`, so a new kind cannot ship without a spec.

pub(crate) mod patterns;

use codeclash_types::CardKind;
use thiserror::Error;

use crate::parse::{Fragment, ParseError, SourceParser};

/// Why a matcher could not produce a yes/no answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A predicate could not resolve a node it needed while inspecting the
    /// tree. The primitive-write classifier treats this as a conservative
    /// rejection; everything else treats it like any other matcher failure.
    #[error("could not resolve {symbol} while inspecting the fragment")]
    ReferenceResolution { symbol: &'static str },
}

/// One card kind's registry entry.
pub struct CardSpec {
    pub kind: CardKind,
    /// Display name shown on the card face.
    pub title: &'static str,
    /// Empty scaffold of the construct, shown when the card is dealt.
    pub skeleton: &'static str,
    /// A filled-in example of the construct.
    pub example: &'static str,
    matcher: patterns::Pattern,
}

impl CardSpec {
    /// The registry entry for `kind`.
    #[must_use]
    pub fn of(kind: CardKind) -> &'static CardSpec {
        match kind {
            CardKind::HashTable => &HASH_TABLE,
            CardKind::BinarySearchTree => &BINARY_SEARCH_TREE,
            CardKind::Class => &CLASS,
            CardKind::Conditional => &CONDITIONAL,
            CardKind::ForLoop => &FOR_LOOP,
            CardKind::WhileLoop => &WHILE_LOOP,
            CardKind::DoWhileLoop => &DO_WHILE_LOOP,
            CardKind::HelperFunction => &HELPER_FUNCTION,
            CardKind::Array => &ARRAY,
            CardKind::LinkedList => &LINKED_LIST,
            CardKind::Object => &OBJECT,
            CardKind::Queue => &QUEUE,
            CardKind::Stack => &STACK,
            CardKind::SwitchCase => &SWITCH_CASE,
        }
    }

    /// Every registry entry, in presentation order.
    #[must_use]
    pub fn all() -> impl Iterator<Item = &'static CardSpec> {
        CardKind::ALL.iter().map(|kind| CardSpec::of(*kind))
    }

    /// Parse `code` and apply this card's structural matcher.
    pub fn matches(&self, parser: &dyn SourceParser, code: &str) -> Result<bool, MatchError> {
        let fragment = parser.parse(code)?;
        self.matches_fragment(&fragment)
    }

    pub(crate) fn matches_fragment(&self, fragment: &Fragment) -> Result<bool, MatchError> {
        (self.matcher)(fragment)
    }
}

static HASH_TABLE: CardSpec = CardSpec {
    kind: CardKind::HashTable,
    title: "Hash Table",
    skeleton: "let hash = {\n\n};",
    example: "let hash = { \"foo\": \"bar\" };",
    matcher: patterns::is_object_literal,
};

static BINARY_SEARCH_TREE: CardSpec = CardSpec {
    kind: CardKind::BinarySearchTree,
    title: "Binary Search Tree",
    skeleton: "class TreeNode {\n    constructor(value) {\n        this.value = value;\n        this.left = null;\n        this.right = null;\n    }\n}",
    example: "class TreeNode {\n    constructor(value) {\n        this.value = value;\n        this.left = null;\n        this.right = null;\n    }\n}\nlet root = new TreeNode(8);",
    matcher: patterns::is_binary_search_tree,
};

static CLASS: CardSpec = CardSpec {
    kind: CardKind::Class,
    title: "Class",
    skeleton: "class Name {\n    constructor() {\n\n    }\n}",
    example: "class Point {\n    constructor(x, y) {\n        this.x = x;\n        this.y = y;\n    }\n}",
    matcher: patterns::is_class,
};

static CONDITIONAL: CardSpec = CardSpec {
    kind: CardKind::Conditional,
    title: "Conditional",
    skeleton: "if (cond) {\n\n} else {\n\n}",
    example: "if (a > b) {\n    max = a;\n} else {\n    max = b;\n}",
    matcher: patterns::is_conditional,
};

static FOR_LOOP: CardSpec = CardSpec {
    kind: CardKind::ForLoop,
    title: "For Loop",
    skeleton: "for (let i = 0; i < n; i++) {\n\n}",
    example: "for (let i = 0; i < 10; i++) {\n    total += i;\n}",
    matcher: patterns::is_for_loop,
};

static WHILE_LOOP: CardSpec = CardSpec {
    kind: CardKind::WhileLoop,
    title: "While Loop",
    skeleton: "while (cond) {\n\n}",
    example: "while (n > 1) {\n    n = n / 2;\n}",
    matcher: patterns::is_while_loop,
};

static DO_WHILE_LOOP: CardSpec = CardSpec {
    kind: CardKind::DoWhileLoop,
    title: "Do While",
    skeleton: "do {\n\n} while (cond);",
    example: "do {\n    attempts++;\n} while (attempts < 3);",
    matcher: patterns::is_do_while_loop,
};

static HELPER_FUNCTION: CardSpec = CardSpec {
    kind: CardKind::HelperFunction,
    title: "Helper Function",
    skeleton: "function name(args) {\n\n}",
    example: "function add(a, b) {\n    return a + b;\n}",
    matcher: patterns::is_named_function,
};

static ARRAY: CardSpec = CardSpec {
    kind: CardKind::Array,
    title: "Array",
    skeleton: "let list = [\n\n];",
    example: "let primes = [2, 3, 5, 7];",
    matcher: patterns::is_array_literal,
};

static LINKED_LIST: CardSpec = CardSpec {
    kind: CardKind::LinkedList,
    title: "Linked List",
    skeleton: "class ListNode {\n    constructor(value) {\n        this.value = value;\n        this.next = null;\n    }\n}",
    example: "class ListNode {\n    constructor(value) {\n        this.value = value;\n        this.next = null;\n    }\n}\nlet head = new ListNode(1);",
    matcher: patterns::is_linked_list,
};

static OBJECT: CardSpec = CardSpec {
    kind: CardKind::Object,
    title: "Object",
    skeleton: "let obj = {\n\n};",
    example: "let user = { name: \"ada\", score: 42 };",
    matcher: patterns::is_object_literal,
};

static QUEUE: CardSpec = CardSpec {
    kind: CardKind::Queue,
    title: "Queue",
    skeleton: "class Queue {\n    enqueue(item) {\n\n    }\n    dequeue() {\n\n    }\n}",
    example: "class Queue {\n    constructor() {\n        this.items = [];\n    }\n    enqueue(item) {\n        this.items.push(item);\n    }\n    dequeue() {\n        return this.items.shift();\n    }\n}",
    matcher: patterns::is_queue,
};

static STACK: CardSpec = CardSpec {
    kind: CardKind::Stack,
    title: "Stack",
    skeleton: "class Stack {\n    push(item) {\n\n    }\n    pop() {\n\n    }\n}",
    example: "class Stack {\n    constructor() {\n        this.items = [];\n    }\n    push(item) {\n        this.items.push(item);\n    }\n    pop() {\n        return this.items.pop();\n    }\n}",
    matcher: patterns::is_stack,
};

static SWITCH_CASE: CardSpec = CardSpec {
    kind: CardKind::SwitchCase,
    title: "Switch",
    skeleton: "switch (day) {\n    case \"Monday\":\n        break;\n    case \"Tuesday\":\n        break;\n    default:\n}",
    example: "switch (status) {\n    case \"open\":\n        handleOpen();\n        break;\n    default:\n        handleClosed();\n}",
    matcher: patterns::is_switch,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::JsParser;

    #[test]
    fn every_kind_has_a_spec_with_metadata() {
        for spec in CardSpec::all() {
            assert!(!spec.title.is_empty(), "{} has no title", spec.kind);
            assert!(!spec.skeleton.is_empty(), "{} has no skeleton", spec.kind);
            assert!(!spec.example.is_empty(), "{} has no example", spec.kind);
        }
    }

    #[test]
    fn dispatch_returns_the_matching_spec() {
        for kind in CardKind::ALL {
            assert_eq!(CardSpec::of(kind).kind, kind);
        }
    }

    #[test]
    fn every_example_satisfies_its_own_matcher() {
        let parser = JsParser::new();
        for spec in CardSpec::all() {
            let matched = spec
                .matches(&parser, spec.example)
                .unwrap_or_else(|err| panic!("{} example failed to classify: {err}", spec.kind));
            assert!(matched, "{} example does not match its own card", spec.kind);
        }
    }

    #[test]
    fn hash_table_and_object_share_the_literal_shape() {
        let parser = JsParser::new();
        let code = "let h = { key: \"value\" };";
        assert_eq!(
            CardSpec::of(CardKind::HashTable).matches(&parser, code),
            Ok(true)
        );
        assert_eq!(
            CardSpec::of(CardKind::Object).matches(&parser, code),
            Ok(true)
        );
    }

    #[test]
    fn mismatched_construct_does_not_match() {
        let parser = JsParser::new();
        let spec = CardSpec::of(CardKind::ForLoop);
        assert_eq!(spec.matches(&parser, "if (x) { y(); }"), Ok(false));
    }

    #[test]
    fn unparseable_code_surfaces_a_parse_error() {
        let parser = JsParser::new();
        let spec = CardSpec::of(CardKind::WhileLoop);
        let result = spec.matches(&parser, "while (x {");
        assert!(matches!(result, Err(MatchError::Parse(_))));
    }
}
