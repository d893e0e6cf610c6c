//! Structural predicates over parsed fragments.
//!
//! Every predicate answers one question about the *shape* of a fragment:
//! does it contain a loop, a class, an array literal, something that looks
//! like a queue. The multi-statement idioms (linked list, BST, queue, stack)
//! are heuristic by contract: a fragment that merely looks like the idiom
//! passes, even if it is functionally wrong.

use tree_sitter::Node;

use super::MatchError;
use crate::parse::Fragment;

/// A structural predicate over a parsed fragment.
pub(crate) type Pattern = fn(&Fragment) -> Result<bool, MatchError>;

/// The compound patterns a primitive write must not contain, paired with
/// names for diagnostics.
pub(crate) const COMPOUND_PATTERNS: [(&str, Pattern); 8] = [
    ("array", is_array_literal),
    ("object", is_object_literal),
    ("loop", is_any_loop),
    ("conditional", is_conditional),
    ("ternary-conditional", is_ternary_conditional),
    ("class", is_class),
    ("switch", is_switch),
    ("function", is_function),
];

const LOOP_KINDS: [&str; 4] = [
    "for_statement",
    "for_in_statement",
    "while_statement",
    "do_statement",
];

const CLASS_KINDS: [&str; 2] = ["class_declaration", "class"];

const FUNCTION_KINDS: [&str; 5] = [
    "function_declaration",
    "generator_function_declaration",
    "function_expression",
    "generator_function",
    "arrow_function",
];

const NAMED_FUNCTION_KINDS: [&str; 2] = [
    "function_declaration",
    "generator_function_declaration",
];

pub(crate) fn is_for_loop(fragment: &Fragment) -> Result<bool, MatchError> {
    Ok(contains_kind(fragment, &["for_statement", "for_in_statement"]))
}

pub(crate) fn is_while_loop(fragment: &Fragment) -> Result<bool, MatchError> {
    Ok(contains_kind(fragment, &["while_statement"]))
}

pub(crate) fn is_do_while_loop(fragment: &Fragment) -> Result<bool, MatchError> {
    Ok(contains_kind(fragment, &["do_statement"]))
}

pub(crate) fn is_any_loop(fragment: &Fragment) -> Result<bool, MatchError> {
    Ok(contains_kind(fragment, &LOOP_KINDS))
}

pub(crate) fn is_conditional(fragment: &Fragment) -> Result<bool, MatchError> {
    Ok(contains_kind(fragment, &["if_statement"]))
}

pub(crate) fn is_ternary_conditional(fragment: &Fragment) -> Result<bool, MatchError> {
    Ok(contains_kind(fragment, &["ternary_expression"]))
}

pub(crate) fn is_switch(fragment: &Fragment) -> Result<bool, MatchError> {
    Ok(contains_kind(fragment, &["switch_statement"]))
}

pub(crate) fn is_class(fragment: &Fragment) -> Result<bool, MatchError> {
    Ok(contains_kind(fragment, &CLASS_KINDS))
}

/// Any function-valued construct: declarations, expressions, arrows.
pub(crate) fn is_function(fragment: &Fragment) -> Result<bool, MatchError> {
    Ok(contains_kind(fragment, &FUNCTION_KINDS))
}

/// A *named* function declaration, the shape the helper-function card asks
/// for. Anonymous expressions and arrows do not qualify.
pub(crate) fn is_named_function(fragment: &Fragment) -> Result<bool, MatchError> {
    Ok(contains_kind(fragment, &NAMED_FUNCTION_KINDS))
}

pub(crate) fn is_array_literal(fragment: &Fragment) -> Result<bool, MatchError> {
    Ok(contains_kind(fragment, &["array"]))
}

pub(crate) fn is_object_literal(fragment: &Fragment) -> Result<bool, MatchError> {
    Ok(contains_kind(fragment, &["object"]))
}

/// A class carrying a successor-style `next` member.
pub(crate) fn is_linked_list(fragment: &Fragment) -> Result<bool, MatchError> {
    for class in nodes_of_kinds(fragment, &CLASS_KINDS) {
        if class_member_names(fragment, class)?.iter().any(|n| *n == "next") {
            return Ok(true);
        }
    }
    Ok(false)
}

/// A class carrying both `left` and `right` child members.
pub(crate) fn is_binary_search_tree(fragment: &Fragment) -> Result<bool, MatchError> {
    for class in nodes_of_kinds(fragment, &CLASS_KINDS) {
        let names = class_member_names(fragment, class)?;
        if names.iter().any(|n| *n == "left") && names.iter().any(|n| *n == "right") {
            return Ok(true);
        }
    }
    Ok(false)
}

/// FIFO shape: an enqueue/dequeue method pair, or push paired with shift.
pub(crate) fn is_queue(fragment: &Fragment) -> Result<bool, MatchError> {
    let names = property_names(fragment, fragment.root());
    let has = |name: &str| names.iter().any(|n| *n == name);
    Ok((has("enqueue") && has("dequeue")) || (has("push") && has("shift")))
}

/// LIFO shape: push paired with pop, as methods or as array calls.
pub(crate) fn is_stack(fragment: &Fragment) -> Result<bool, MatchError> {
    let names = property_names(fragment, fragment.root());
    let has = |name: &str| names.iter().any(|n| *n == name);
    Ok(has("push") && has("pop"))
}

/// Depth-first scan for any node of one of `kinds`.
fn contains_kind(fragment: &Fragment, kinds: &[&str]) -> bool {
    let mut stack = vec![fragment.root()];
    while let Some(node) = stack.pop() {
        if kinds.contains(&node.kind()) {
            return true;
        }
        let mut cursor = node.walk();
        stack.extend(node.children(&mut cursor));
    }
    false
}

/// Collect every node of one of `kinds`, in no particular order.
fn nodes_of_kinds<'f>(fragment: &'f Fragment, kinds: &[&str]) -> Vec<Node<'f>> {
    let mut found = Vec::new();
    let mut stack = vec![fragment.root()];
    while let Some(node) = stack.pop() {
        if kinds.contains(&node.kind()) {
            found.push(node);
        }
        let mut cursor = node.walk();
        stack.extend(node.children(&mut cursor));
    }
    found
}

/// Every property identifier under `scope`: member accesses (`this.next`),
/// method names, and class field names all surface here.
fn property_names<'f>(fragment: &'f Fragment, scope: Node<'_>) -> Vec<&'f str> {
    let mut names = Vec::new();
    let mut stack = vec![scope];
    while let Some(node) = stack.pop() {
        if node.kind() == "property_identifier" {
            if let Some(text) = fragment.text_of(node) {
                names.push(text);
            }
        }
        let mut cursor = node.walk();
        stack.extend(node.children(&mut cursor));
    }
    names
}

/// Property identifiers declared or assigned within a class node's body.
fn class_member_names<'f>(
    fragment: &'f Fragment,
    class: Node<'_>,
) -> Result<Vec<&'f str>, MatchError> {
    let body = class
        .child_by_field_name("body")
        .ok_or(MatchError::ReferenceResolution {
            symbol: "class body",
        })?;
    Ok(property_names(fragment, body))
}
