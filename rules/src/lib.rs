//! Move legality and code-pattern classification for codeclash.
//!
//! Given a board snapshot and a proposed move, the engine answers one
//! question: is the move legal? For write and consume moves that means
//! classifying the *shape* of the text the player added to the shared editor
//! buffer: a line diff extracts the added code, a parser turns it into a
//! syntax tree, and a fixed taxonomy of structural predicates decides what
//! construct it looks like. Nothing here executes user code or scores it for
//! correctness.
//!
//! Every entry point is a pure function of its inputs; no state survives a
//! call. Internal failures on the fallible path never escape: the enforcer
//! folds them into a permissive [`Verdict`] (see [`enforcer`]) so a player's
//! turn is never blocked on a tooling error.
//!
//! - **`diff`**: added-line extraction between buffer snapshots
//! - **`parse`**: the injected parser capability and fragment surface
//! - **`cards`**: the card-kind registry and its structural matchers
//! - **`primitive`**: the single-primitive-statement classifier for writes
//! - **`enforcer`**: move dispatch, ownership, and the fail-open policy

pub mod cards;
pub mod diff;
pub mod enforcer;
pub mod parse;
pub mod primitive;

pub use cards::{CardSpec, MatchError};
pub use diff::{diff_added, diff_stats};
pub use enforcer::{MalformedInvocation, RuleError, RulesEnforcer, Verdict, player_has_card};
pub use parse::{Fragment, JsParser, ParseError, SourceParser};
pub use primitive::is_primitive;
