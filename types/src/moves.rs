//! Proposed moves.
//!
//! `code` on write/consume always carries the *full* proposed new buffer
//! contents, not a delta; the rules engine derives the added text itself so
//! clients cannot lie about what changed.

use serde::{Deserialize, Serialize};

use crate::board::PlayerId;
use crate::card::CardKind;

/// A move a player proposes against the current board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Move {
    /// Add one primitive statement to the shared buffer.
    Write { player_id: PlayerId, code: String },
    /// Spend a card from hand without demonstrating it.
    Discard { player_id: PlayerId, card: CardKind },
    /// Spend a card by demonstrating its construct in the buffer.
    Consume {
        player_id: PlayerId,
        card: CardKind,
        code: String,
    },
}

impl Move {
    #[must_use]
    pub fn player_id(&self) -> &PlayerId {
        match self {
            Move::Write { player_id, .. }
            | Move::Discard { player_id, .. }
            | Move::Consume { player_id, .. } => player_id,
        }
    }

    /// The card kind the move names, when it names one.
    #[must_use]
    pub fn card(&self) -> Option<CardKind> {
        match self {
            Move::Write { .. } => None,
            Move::Discard { card, .. } | Move::Consume { card, .. } => Some(*card),
        }
    }

    /// The full proposed buffer contents, for moves that carry one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Move::Write { code, .. } | Move::Consume { code, .. } => Some(code),
            Move::Discard { .. } => None,
        }
    }
}
