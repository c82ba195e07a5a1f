use crate::tokenizer::{insert_descendant_combinators, tokenize};
use crate::tokens::{Token, TokenType};
use crate::tree::SelectorTree;
use crate::types::{Error, Result};

mod attribute;
mod nth;
mod pseudo;
mod selector;
mod selector_list;

/// Recursive descent parser over the preprocessed token stream. One parser
/// instance drives exactly one parse; it holds the token cursor and the tree
/// under construction, so instances must not be shared between parses.
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
    pub(crate) tree: SelectorTree,
}

impl Parser {
    /// Scans `input` and preprocesses the token stream. Fails with
    /// [`Error::Lex`] when the input contains a character no rule accepts.
    pub fn new(input: &str) -> Result<Self> {
        let tokens = insert_descendant_combinators(tokenize(input)?);

        Ok(Parser {
            tokens,
            index: 0,
            tree: SelectorTree::new(),
        })
    }

    /// ```txt
    /// selector_list
    ///     : complex_selector (',' complex_selector)*
    ///     ;
    /// ```
    ///
    /// Consumes the whole token stream and returns the finished tree, rooted
    /// at a selector list. After the grammar pass, nth-style function
    /// arguments that were parsed as selector lists are rewritten into
    /// An+B nodes in place.
    pub fn parse(mut self) -> Result<SelectorTree> {
        let root = self.parse_selector_list()?;
        self.consume(TokenType::Eof)?;

        self.tree.set_root(root);

        let mut tree = self.tree;
        nth::normalize_nth_expressions(&mut tree);
        Ok(tree)
    }

    fn current(&self) -> &Token {
        // the Eof sentinel is always last, so the cursor never runs past it
        &self.tokens[self.index.min(self.tokens.len() - 1)]
    }

    fn lookahead(&self, n: usize) -> &Token {
        &self.tokens[(self.index + n).min(self.tokens.len() - 1)]
    }

    fn consume_any(&mut self) -> Token {
        let token = self.current().clone();
        if self.index < self.tokens.len() - 1 {
            self.index += 1;
        }
        token
    }

    fn consume(&mut self, token_type: TokenType) -> Result<Token> {
        if self.current().token_type != token_type {
            return Err(self.unexpected(&format!("{:?}", token_type)));
        }

        Ok(self.consume_any())
    }

    /// Parse error for the current lookahead, naming what was expected.
    fn unexpected(&self, expected: &str) -> Error {
        let token = self.current();
        Error::Parse {
            expected: expected.to_string(),
            found: token.value.clone(),
            location: token.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use crate::tree::SelectorTree;

    fn parse(input: &str) -> SelectorTree {
        Parser::new(input).unwrap().parse().unwrap()
    }

    fn parse_err(input: &str) -> Error {
        Parser::new(input)
            .and_then(|parser| parser.parse())
            .unwrap_err()
    }

    /// (kind, value) pairs of the children of `id`, for compact shape checks.
    fn child_shapes(tree: &SelectorTree, id: crate::node::NodeId) -> Vec<(NodeKind, String)> {
        tree.get(id)
            .unwrap()
            .children()
            .iter()
            .map(|&child| {
                let node = tree.get(child).unwrap();
                (node.kind(), node.value().to_string())
            })
            .collect()
    }

    #[test]
    fn parse_type_selector() {
        let tree = parse("div");
        let root = tree.get(tree.root()).unwrap();

        assert_eq!(root.kind(), NodeKind::SelectorList);
        assert_eq!(
            child_shapes(&tree, root.id()),
            vec![(NodeKind::SimpleSelectorSequence, String::new())]
        );

        let seq = root.children()[0];
        assert_eq!(
            child_shapes(&tree, seq),
            vec![(NodeKind::TypeSelector, "div".to_string())]
        );
    }

    #[test]
    fn parse_compound_selector_order() {
        let tree = parse("div.foo#bar");
        let seq = tree.get(tree.root()).unwrap().children()[0];

        assert_eq!(
            child_shapes(&tree, seq),
            vec![
                (NodeKind::TypeSelector, "div".to_string()),
                (NodeKind::ClassSelector, "foo".to_string()),
                (NodeKind::IdSelector, "bar".to_string()),
            ]
        );
    }

    #[test]
    fn parse_child_combinator() {
        let tree = parse("div > p");
        let selector = tree.get(tree.root()).unwrap().children()[0];

        let shapes = child_shapes(&tree, selector);
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[0].0, NodeKind::SimpleSelectorSequence);
        assert_eq!(shapes[1], (NodeKind::ChildCombinator, ">".to_string()));
        assert_eq!(shapes[2].0, NodeKind::SimpleSelectorSequence);
    }

    #[test]
    fn parse_descendant_combinator() {
        let tree = parse("div p");
        let selector = tree.get(tree.root()).unwrap().children()[0];

        let shapes = child_shapes(&tree, selector);
        assert_eq!(shapes[1], (NodeKind::DescendantCombinator, " ".to_string()));
    }

    #[test]
    fn combinators_fold_left() {
        let tree = parse("a > b + c");
        let outer = tree.get(tree.root()).unwrap().children()[0];

        // ((a > b) + c): the left child is itself a selector
        let shapes = child_shapes(&tree, outer);
        assert_eq!(shapes[0].0, NodeKind::Selector);
        assert_eq!(shapes[1], (NodeKind::AdjacentCombinator, "+".to_string()));

        let inner = tree.get(outer).unwrap().children()[0];
        let inner_shapes = child_shapes(&tree, inner);
        assert_eq!(inner_shapes[1], (NodeKind::ChildCombinator, ">".to_string()));
    }

    #[test]
    fn parse_selector_list_members() {
        let tree = parse("h1, h2, h3");
        let root = tree.get(tree.root()).unwrap();
        assert_eq!(root.children().len(), 3);
    }

    #[test]
    fn parse_empty_input() {
        assert!(matches!(parse_err(""), Error::Parse { .. }));
        assert!(matches!(parse_err("   \t\n"), Error::Parse { .. }));
    }

    #[test]
    fn parse_lone_combinator() {
        assert!(matches!(parse_err(">"), Error::Parse { .. }));
    }

    #[test]
    fn parse_dangling_combinator() {
        let err = parse_err("div >");
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn parse_consecutive_combinators() {
        assert!(matches!(parse_err("div > > p"), Error::Parse { .. }));
    }

    #[test]
    fn parse_unclosed_bracket() {
        assert!(matches!(parse_err("[href"), Error::Parse { .. }));
    }

    #[test]
    fn parse_unclosed_paren() {
        assert!(matches!(parse_err(":is(div"), Error::Parse { .. }));
    }

    #[test]
    fn parse_double_equal() {
        assert!(matches!(parse_err("[a==b]"), Error::Parse { .. }));
    }

    #[test]
    fn parse_trailing_comma() {
        assert!(matches!(parse_err("div,"), Error::Parse { .. }));
    }

    #[test]
    fn parse_error_carries_position() {
        let err = parse_err("div > >");
        assert_eq!(err.location(), crate::Location::new(1, 7));
    }
}
