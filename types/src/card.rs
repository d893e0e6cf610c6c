//! Card kinds and hand entries.
//!
//! `CardKind` is the closed taxonomy of code constructs the game deals in.
//! The set is fixed at build time; the rules engine dispatches on it
//! exhaustively, so adding a kind is a compile-visible change everywhere a
//! matcher or skeleton is required.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed enumeration of constructs a card can represent.
///
/// Wire form is kebab-case (`"hash-table"`, `"for-loop"`, ...), matching the
/// identifiers the surrounding system sends over the socket. An unknown kind
/// fails deserialization; the engine never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardKind {
    HashTable,
    BinarySearchTree,
    Class,
    Conditional,
    ForLoop,
    WhileLoop,
    DoWhileLoop,
    HelperFunction,
    Array,
    LinkedList,
    Object,
    Queue,
    Stack,
    SwitchCase,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown card kind: {0}")]
pub struct CardKindParseError(pub String);

impl CardKind {
    /// Every kind, in presentation order.
    pub const ALL: [CardKind; 14] = [
        CardKind::HashTable,
        CardKind::BinarySearchTree,
        CardKind::Class,
        CardKind::Conditional,
        CardKind::ForLoop,
        CardKind::WhileLoop,
        CardKind::DoWhileLoop,
        CardKind::HelperFunction,
        CardKind::Array,
        CardKind::LinkedList,
        CardKind::Object,
        CardKind::Queue,
        CardKind::Stack,
        CardKind::SwitchCase,
    ];

    /// The wire identifier for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardKind::HashTable => "hash-table",
            CardKind::BinarySearchTree => "binary-search-tree",
            CardKind::Class => "class",
            CardKind::Conditional => "conditional",
            CardKind::ForLoop => "for-loop",
            CardKind::WhileLoop => "while-loop",
            CardKind::DoWhileLoop => "do-while-loop",
            CardKind::HelperFunction => "helper-function",
            CardKind::Array => "array",
            CardKind::LinkedList => "linked-list",
            CardKind::Object => "object",
            CardKind::Queue => "queue",
            CardKind::Stack => "stack",
            CardKind::SwitchCase => "switch-case",
        }
    }

    /// Parse a wire identifier. Returns `None` for anything outside the
    /// taxonomy; callers decide whether that is a rejection or an error.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        CardKind::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl FromStr for CardKind {
    type Err = CardKindParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CardKind::parse(value).ok_or_else(|| CardKindParseError(value.to_string()))
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in a player's hand.
///
/// A hand is an unordered multiset; duplicates of the same kind are allowed
/// and count separately toward discard/consume eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,
}

impl Card {
    #[must_use]
    pub const fn new(kind: CardKind) -> Self {
        Self { kind }
    }
}
