use crate::location::Location;
use crate::node::{NodeId, NodeKind};
use crate::parser::Parser;
use crate::tokens::TokenType;
use crate::tree::SelectorTree;
use lazy_static::lazy_static;
use regex::Regex;

/// Functional pseudo-classes taking a step expression argument.
pub(crate) const NTH_FUNCTION_NAMES: [&str; 6] = [
    "nth-child",
    "nth-last-child",
    "nth-of-type",
    "nth-last-of-type",
    "nth-col",
    "nth-last-col",
];

lazy_static! {
    /// Canonical shape of a step expression value: `even`, `odd`, a bare
    /// integer, or `An+B` with optional signs and parts.
    pub(crate) static ref AN_PLUS_B: Regex =
        Regex::new(r"^(even|odd|[+-]?\d*n(?:[+-]\d+)?|[+-]?n(?:[+-]\d+)?|\d+)$")
            .expect("step expression rule");
}

impl Parser {
    /// Matches a step expression by raw token shape. The scanner has no
    /// dedicated plus token, so the next-sibling token doubles as the
    /// positive sign, and fused negative offsets like `3n-2` arrive as a
    /// number followed by an `n-2` identifier.
    ///
    /// Consumes nothing unless a shape matches completely and runs up to the
    /// closing parenthesis; on `None` the caller falls back to the
    /// selector-list grammar, and a later rewrite pass picks up one-token
    /// arguments such as `even` or `n-1` from there.
    pub(crate) fn parse_nth_expression(&mut self) -> Option<NodeId> {
        log::trace!("parse_nth_expression");

        let location = self.current().location;
        let (value, length) = self.match_nth_shape()?;

        if !AN_PLUS_B.is_match(&value) {
            return None;
        }
        if self.lookahead(length).token_type != TokenType::RParen {
            return None;
        }

        for _ in 0..length {
            self.consume_any();
        }

        Some(self.tree.create_node(NodeKind::AnPlusB, value, location))
    }

    fn match_nth_shape(&self) -> Option<(String, usize)> {
        use TokenType::{Ident, Minus, NextSiblingCombinator, Number};

        let kind = |n: usize| self.lookahead(n).token_type;
        let value = |n: usize| self.lookahead(n).value.clone();

        let shape = match (kind(0), kind(1), kind(2), kind(3), kind(4)) {
            (Minus, Number, Ident, NextSiblingCombinator, Number) => {
                (format!("-{}{}+{}", value(1), value(2), value(4)), 5)
            }
            (Minus, Number, Ident, Minus, Number) => {
                (format!("-{}{}-{}", value(1), value(2), value(4)), 5)
            }
            (Minus, Number, Ident, _, _) => (format!("-{}{}", value(1), value(2)), 3),
            (Minus, Ident, NextSiblingCombinator, Number, _) => {
                (format!("-{}+{}", value(1), value(3)), 4)
            }
            (Minus, Ident, Minus, Number, _) => (format!("-{}-{}", value(1), value(3)), 4),
            (Minus, Ident, _, _, _) => (format!("-{}", value(1)), 2),
            (Number, Ident, NextSiblingCombinator, Number, _) => {
                (format!("{}{}+{}", value(0), value(1), value(3)), 4)
            }
            (Number, Ident, Minus, Number, _) => (format!("{}{}-{}", value(0), value(1), value(3)), 4),
            (Number, Ident, _, _, _) => (format!("{}{}", value(0), value(1)), 2),
            (Number, _, _, _, _) => (value(0), 1),
            (Ident, NextSiblingCombinator, Number, _, _) => (format!("{}+{}", value(0), value(2)), 3),
            (Ident, Minus, Number, _, _) => (format!("{}-{}", value(0), value(2)), 3),
            _ => return None,
        };

        Some(shape)
    }
}

/// Rewrite pass over a finished tree. One-token step expressions (`even`,
/// `odd`, `n`, fused forms like `2n-1` scanned as a single identifier) come
/// out of the grammar as a one-selector list holding a lone type selector.
/// For the nth-family functions, such an argument is swapped for a step
/// expression node carrying the same value and position.
pub(crate) fn normalize_nth_expressions(tree: &mut SelectorTree) {
    log::trace!("normalize_nth_expressions");

    let mut stack = vec![tree.root()];
    let mut rewrites = Vec::new();

    while let Some(id) = stack.pop() {
        let node = match tree.get(id) {
            Some(node) => node,
            None => continue,
        };

        for &child in node.children().iter().rev() {
            stack.push(child);
        }

        if node.kind() == NodeKind::PseudoFunction && NTH_FUNCTION_NAMES.contains(&node.value()) {
            if let Some((value, location)) = lone_step_argument(tree, id) {
                rewrites.push((id, value, location));
            }
        }
    }

    for (function, value, location) in rewrites {
        let expression = tree.create_node(NodeKind::AnPlusB, value, location);
        tree.replace_child(function, 0, expression);
    }
}

fn lone_step_argument(tree: &SelectorTree, function: NodeId) -> Option<(String, Location)> {
    let children = tree.get(function)?.children();
    if children.len() != 1 {
        return None;
    }

    let list = tree.get(children[0])?;
    if list.kind() != NodeKind::SelectorList || list.children().len() != 1 {
        return None;
    }

    let sequence = tree.get(list.children()[0])?;
    if sequence.kind() != NodeKind::SimpleSelectorSequence || sequence.children().len() != 1 {
        return None;
    }

    let leaf = tree.get(sequence.children()[0])?;
    if leaf.kind() != NodeKind::TypeSelector || !AN_PLUS_B.is_match(leaf.value()) {
        return None;
    }

    Some((leaf.value().to_string(), leaf.location()))
}
