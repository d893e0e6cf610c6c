//! End-to-end legality properties of the rules engine.

use codeclash_rules::RulesEnforcer;
use codeclash_types::{Board, Card, CardKind, Deck, Move, Player, PlayerId};
use serde_json::json;

fn board(editor_text: &str, remaining: u32, players: Vec<Player>) -> Board {
    Board {
        editor_text: editor_text.to_string(),
        deck: Deck { remaining },
        players,
    }
}

fn player(id: &str, kinds: &[CardKind]) -> Player {
    Player {
        id: PlayerId::new(id),
        hand: kinds.iter().copied().map(Card::new).collect(),
    }
}

#[test]
fn unsupported_move_tag_is_illegal() {
    let enforcer = RulesEnforcer::new();
    let board = json!({
        "editorText": "let a = 1;",
        "deck": { "remaining": 4 },
        "players": [{ "id": "p1", "hand": [{ "kind": "for-loop" }] }]
    });
    let mv = json!({ "type": "meditate", "playerId": "p1" });
    assert!(!enforcer.is_legal_invocation(&[board, mv]));
}

#[test]
fn discard_is_illegal_with_an_empty_deck() {
    let enforcer = RulesEnforcer::new();
    let board = board("", 0, vec![player("p1", &[CardKind::Array, CardKind::Array])]);
    let mv = Move::Discard {
        player_id: PlayerId::new("p1"),
        card: CardKind::Array,
    };
    assert!(!enforcer.is_legal_move_on_board(&board, &mv));
}

#[test]
fn discard_is_legal_with_deck_and_card() {
    let enforcer = RulesEnforcer::new();
    let board = board("", 1, vec![player("p1", &[CardKind::Array])]);
    let mv = Move::Discard {
        player_id: PlayerId::new("p1"),
        card: CardKind::Array,
    };
    assert!(enforcer.is_legal_move_on_board(&board, &mv));
}

#[test]
fn consume_is_illegal_without_the_claimed_card() {
    let enforcer = RulesEnforcer::new();
    let board = board("let a = 1;", 3, vec![player("p1", &[CardKind::WhileLoop])]);
    let mv = Move::Consume {
        player_id: PlayerId::new("p1"),
        card: CardKind::ForLoop,
        code: "let a = 1;\nfor (let i = 0; i < 3; i++) {}".to_string(),
    };
    // The added code is a textbook for loop, but the hand has no for-loop card.
    assert!(!enforcer.is_legal_move_on_board(&board, &mv));
}

#[test]
fn consume_is_legal_when_card_and_construct_agree() {
    let enforcer = RulesEnforcer::new();
    let board = board("let a = 1;", 3, vec![player("p1", &[CardKind::ForLoop])]);
    let mv = Move::Consume {
        player_id: PlayerId::new("p1"),
        card: CardKind::ForLoop,
        code: "let a = 1;\nfor (let i = 0; i < 3; i++) {}".to_string(),
    };
    assert!(enforcer.is_legal_move_on_board(&board, &mv));
}

#[test]
fn consume_is_illegal_when_the_construct_disagrees() {
    let enforcer = RulesEnforcer::new();
    let board = board("let a = 1;", 3, vec![player("p1", &[CardKind::ForLoop])]);
    let mv = Move::Consume {
        player_id: PlayerId::new("p1"),
        card: CardKind::ForLoop,
        code: "let a = 1;\nif (a > 0) { a--; }".to_string(),
    };
    assert!(!enforcer.is_legal_move_on_board(&board, &mv));
}

#[test]
fn write_is_legal_for_a_single_primitive_statement() {
    let enforcer = RulesEnforcer::new();
    let board = board("let a = 1;", 3, vec![player("p1", &[])]);
    let mv = Move::Write {
        player_id: PlayerId::new("p1"),
        code: "let a = 1;\nlet b = 2;".to_string(),
    };
    assert!(enforcer.is_legal_move_on_board(&board, &mv));
}

#[test]
fn write_is_illegal_for_a_compound_construct() {
    let enforcer = RulesEnforcer::new();
    let board = board("let a = 1;", 3, vec![player("p1", &[])]);
    let mv = Move::Write {
        player_id: PlayerId::new("p1"),
        code: "let a = 1;\nfor (let i = 0; i < 3; i++) {}".to_string(),
    };
    assert!(!enforcer.is_legal_move_on_board(&board, &mv));
}

#[test]
fn write_is_illegal_for_two_added_statements() {
    let enforcer = RulesEnforcer::new();
    let board = board("let a = 1;", 3, vec![player("p1", &[])]);
    let mv = Move::Write {
        player_id: PlayerId::new("p1"),
        code: "let a = 1;\nlet b = 2;\nlet c = 3;".to_string(),
    };
    assert!(!enforcer.is_legal_move_on_board(&board, &mv));
}

#[test]
fn unparseable_write_is_allowed_by_the_fail_open_policy() {
    let enforcer = RulesEnforcer::new();
    let board = board("let a = 1;", 3, vec![player("p1", &[])]);
    let mv = Move::Write {
        player_id: PlayerId::new("p1"),
        code: "let a = 1;\nfor (let i = 0; i <".to_string(),
    };
    assert!(enforcer.is_legal_move_on_board(&board, &mv));
}

#[test]
fn unparseable_consume_is_allowed_when_the_card_is_held() {
    let enforcer = RulesEnforcer::new();
    let board = board("let a = 1;", 3, vec![player("p1", &[CardKind::ForLoop])]);
    let mv = Move::Consume {
        player_id: PlayerId::new("p1"),
        card: CardKind::ForLoop,
        code: "let a = 1;\nfor (let i = 0; i <".to_string(),
    };
    assert!(enforcer.is_legal_move_on_board(&board, &mv));
}

#[test]
fn judging_the_same_move_twice_gives_the_same_answer() {
    let enforcer = RulesEnforcer::new();
    let board = board(
        "let a = 1;",
        2,
        vec![player("p1", &[CardKind::SwitchCase])],
    );
    let mv = Move::Consume {
        player_id: PlayerId::new("p1"),
        card: CardKind::SwitchCase,
        code: "let a = 1;\nswitch (a) { default: }".to_string(),
    };
    let first = enforcer.is_legal_move_on_board(&board, &mv);
    let second = enforcer.is_legal_move_on_board(&board, &mv);
    assert_eq!(first, second);
    assert!(first);
}

#[test]
fn idiom_cards_accept_structural_lookalikes() {
    let enforcer = RulesEnforcer::new();
    // Functionally wrong (nothing is ever linked), but shaped like the idiom.
    let code = "class ListNode {\n  constructor(v) {\n    this.value = v;\n    this.next = null;\n  }\n}";
    let board = board("", 1, vec![player("p1", &[CardKind::LinkedList])]);
    let mv = Move::Consume {
        player_id: PlayerId::new("p1"),
        card: CardKind::LinkedList,
        code: code.to_string(),
    };
    assert!(enforcer.is_legal_move_on_board(&board, &mv));
}

#[test]
fn consume_via_wire_invocation_matches_the_typed_path() {
    let enforcer = RulesEnforcer::new();
    let board_json = json!({
        "editorText": "let a = 1;",
        "deck": { "remaining": 3 },
        "players": [{ "id": "p1", "hand": [{ "kind": "for-loop" }] }]
    });
    let mv_json = json!({
        "type": "consume",
        "playerId": "p1",
        "card": "for-loop",
        "code": "let a = 1;\nfor (let i = 0; i < 3; i++) {}"
    });
    assert!(enforcer.is_legal_invocation(&[board_json, mv_json]));
}
