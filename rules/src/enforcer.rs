//! Move validation: dispatch, ownership, and the fail-open policy.
//!
//! The enforcer is stateless; every verdict is a pure function of the board
//! snapshot and the proposed move. Internal failures on the fallible path
//! are folded into [`Verdict::LegalByPolicy`]: players are allowed to submit
//! syntactically broken code by accident, and a tooling failure must never
//! block a turn. The tradeoff is accepted and deliberately visible in the
//! type, not hidden in a catch-all.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use codeclash_types::{Board, CardKind, Deck, Move, Player, PlayerId};

use crate::cards::{CardSpec, MatchError};
use crate::diff::diff_added;
use crate::parse::{JsParser, ParseError, SourceParser};
use crate::primitive::is_primitive;

/// Any failure on the enforcer's fallible path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Match(#[from] MatchError),
}

/// The wire caller supplied an argument shape the enforcer does not accept.
///
/// Unlike every other failure, this is decided *before* the fallible path
/// and is never converted to a permissive verdict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported invocation shape: {0}")]
pub struct MalformedInvocation(pub String);

/// Outcome of judging one move.
///
/// `LegalByPolicy` records that evaluation failed and the fail-open policy
/// allowed the move anyway; callers that only need the boolean use
/// [`Verdict::allows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Legal,
    Illegal,
    LegalByPolicy,
}

impl Verdict {
    /// Fold a fallible rule evaluation into the permissive contract.
    fn from_outcome(outcome: Result<bool, RuleError>) -> Self {
        match outcome {
            Ok(true) => Verdict::Legal,
            Ok(false) => Verdict::Illegal,
            Err(err) => {
                warn!(error = %err, "rule evaluation failed; allowing move by fail-open policy");
                Verdict::LegalByPolicy
            }
        }
    }

    /// Whether the move may proceed.
    #[must_use]
    pub const fn allows(self) -> bool {
        !matches!(self, Verdict::Illegal)
    }
}

/// Whether the player with `player_id` holds at least one card of `kind`.
///
/// At most one player with a matching id is expected; an absent player is
/// simply `false`, not an error.
#[must_use]
pub fn player_has_card(players: &[Player], player_id: &PlayerId, kind: CardKind) -> bool {
    players
        .iter()
        .find(|player| player.id == *player_id)
        .is_some_and(|player| player.has_card(kind))
}

/// The move validator.
///
/// Generic over the parsing capability so tests can inject a deterministic
/// or failing parser; production callers use the default JavaScript parser.
#[derive(Debug, Clone)]
pub struct RulesEnforcer<P = JsParser> {
    parser: P,
}

impl RulesEnforcer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            parser: JsParser::new(),
        }
    }
}

impl Default for RulesEnforcer {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SourceParser> RulesEnforcer<P> {
    #[must_use]
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Judge a move with an explicit deck and player list.
    #[must_use]
    pub fn is_legal_move(
        &self,
        board: &Board,
        mv: &Move,
        deck: &Deck,
        players: &[Player],
    ) -> bool {
        self.judge(board, mv, deck, players).allows()
    }

    /// Judge a move deriving deck and players from the board snapshot.
    #[must_use]
    pub fn is_legal_move_on_board(&self, board: &Board, mv: &Move) -> bool {
        self.judge(board, mv, &board.deck, &board.players).allows()
    }

    /// Judge a wire-level invocation: a JSON argument array of either
    /// `[board, move, deck, players]` or `[board, move]`.
    ///
    /// Any other arity, or arguments that do not decode to those shapes, is
    /// malformed: immediately illegal, decided before the fallible path and
    /// never subject to the fail-open conversion.
    #[must_use]
    pub fn is_legal_invocation(&self, args: &[Value]) -> bool {
        match decode_invocation(args) {
            Ok((board, mv, deck, players)) => self.judge(&board, &mv, &deck, &players).allows(),
            Err(err) => {
                debug!(error = %err, "rejecting invocation");
                false
            }
        }
    }

    /// Judge a move, reporting the full verdict including whether the
    /// fail-open policy decided it.
    #[must_use]
    pub fn judge(&self, board: &Board, mv: &Move, deck: &Deck, players: &[Player]) -> Verdict {
        let verdict = Verdict::from_outcome(self.check_move(board, mv, deck, players));
        debug!(player = %mv.player_id(), ?verdict, "judged move");
        verdict
    }

    fn check_move(
        &self,
        board: &Board,
        mv: &Move,
        deck: &Deck,
        players: &[Player],
    ) -> Result<bool, RuleError> {
        match mv {
            Move::Discard { player_id, card } => {
                Ok(deck.remaining > 0 && player_has_card(players, player_id, *card))
            }
            Move::Consume {
                player_id,
                card,
                code,
            } => {
                let added = diff_added(&board.editor_text, code);
                Ok(player_has_card(players, player_id, *card)
                    && self.code_matches_card(*card, &added))
            }
            Move::Write { code, .. } => {
                let added = diff_added(&board.editor_text, code);
                Ok(is_primitive(&self.parser, &added)?)
            }
        }
    }

    /// Run the single targeted matcher for a consume move. Any failure here
    /// counts as a successful match, consistent with the fail-open contract:
    /// a player trying to demonstrate a card is given the benefit of the
    /// doubt when their fragment cannot be classified.
    fn code_matches_card(&self, kind: CardKind, code: &str) -> bool {
        match CardSpec::of(kind).matches(&self.parser, code) {
            Ok(matched) => matched,
            Err(err) => {
                warn!(card = %kind, error = %err, "matcher failed; accepting by fail-open policy");
                true
            }
        }
    }
}

/// Decode a wire argument array into the enforcer's typed inputs.
fn decode_invocation(
    args: &[Value],
) -> Result<(Board, Move, Deck, Vec<Player>), MalformedInvocation> {
    match args {
        [board, mv, deck, players] => {
            let board = decode::<Board>("board", board)?;
            let mv = decode::<Move>("move", mv)?;
            let deck = decode::<Deck>("deck", deck)?;
            let players = decode::<Vec<Player>>("players", players)?;
            Ok((board, mv, deck, players))
        }
        [board, mv] => {
            let board = decode::<Board>("board", board)?;
            let mv = decode::<Move>("move", mv)?;
            let deck = board.deck;
            let players = board.players.clone();
            Ok((board, mv, deck, players))
        }
        other => Err(MalformedInvocation(format!(
            "expected 2 or 4 arguments, got {}",
            other.len()
        ))),
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    what: &str,
    value: &Value,
) -> Result<T, MalformedInvocation> {
    serde_json::from_value(value.clone())
        .map_err(|err| MalformedInvocation(format!("{what} did not decode: {err}")))
}
