//! Board snapshot: the shared editor buffer, the deck, and the players.
//!
//! These are read-only views supplied per validation call. The engine never
//! owns or mutates game state; the orchestration layer that holds the
//! authoritative state serializes snapshots into this shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardKind};

/// Opaque player identifier, assigned by the session layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The draw pile. Only the remaining count matters for legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub remaining: u32,
}

/// A player and their current hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub hand: Vec<Card>,
}

impl Player {
    /// Whether this player holds at least one card of `kind`.
    #[must_use]
    pub fn has_card(&self, kind: CardKind) -> bool {
        self.hand.iter().any(|card| card.kind == kind)
    }
}

/// A read-only view of the game state for one validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Full contents of the shared editor buffer.
    pub editor_text: String,
    pub deck: Deck,
    pub players: Vec<Player>,
}
