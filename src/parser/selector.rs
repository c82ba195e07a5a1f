use crate::node::{NodeId, NodeKind};
use crate::parser::Parser;
use crate::tokens::TokenType;
use crate::types::Result;

impl Parser {
    /// ```txt
    /// complex_selector
    ///     : compound_selector (combinator compound_selector)*
    ///     ;
    /// ```
    ///
    /// Folds left, so `a > b + c` becomes `((a > b) + c)`: every selector
    /// node holds exactly a left side, a combinator and a right side.
    pub(crate) fn parse_complex_selector(&mut self) -> Result<NodeId> {
        log::trace!("parse_complex_selector");

        let left = self.parse_simple_selector_sequence()?;
        self.parse_complex_selector_tail(left)
    }

    pub(crate) fn parse_complex_selector_tail(&mut self, mut left: NodeId) -> Result<NodeId> {
        while self.current().token_type.is_combinator() {
            let combinator = self.parse_combinator()?;
            let right = self.parse_simple_selector_sequence()?;

            let location = self.tree.node(left).location();
            let selector = self.tree.create_node(NodeKind::Selector, "", location);
            self.tree.add_child(selector, left);
            self.tree.add_child(selector, combinator);
            self.tree.add_child(selector, right);
            left = selector;
        }

        Ok(left)
    }

    fn parse_combinator(&mut self) -> Result<NodeId> {
        log::trace!("parse_combinator");

        let (kind, value) = match self.current().token_type {
            TokenType::ChildCombinator => (NodeKind::ChildCombinator, ">"),
            TokenType::NextSiblingCombinator => (NodeKind::AdjacentCombinator, "+"),
            TokenType::SubsequentSiblingCombinator => (NodeKind::SiblingCombinator, "~"),
            TokenType::DescendantCombinator => (NodeKind::DescendantCombinator, " "),
            _ => return Err(self.unexpected("combinator")),
        };

        let token = self.consume_any();
        Ok(self.tree.create_node(kind, value, token.location))
    }

    /// ```txt
    /// compound_selector
    ///     : (type_selector | subclass_selector) subclass_selector*
    ///     ;
    /// ```
    ///
    /// A run of simple selectors applying to one element. A type or
    /// universal selector may only appear at the head.
    pub(crate) fn parse_simple_selector_sequence(&mut self) -> Result<NodeId> {
        log::trace!("parse_simple_selector_sequence");

        let location = self.current().location;
        let mut children = Vec::new();

        match self.current().token_type {
            TokenType::Ident => {
                let token = self.consume_any();
                children.push(self.tree.create_node(
                    NodeKind::TypeSelector,
                    token.value,
                    token.location,
                ));
            }
            TokenType::Star => {
                let token = self.consume_any();
                children.push(self.tree.create_node(
                    NodeKind::UniversalSelector,
                    "*",
                    token.location,
                ));
            }
            _ => {}
        }

        loop {
            let child = match self.current().token_type {
                TokenType::Dot => self.parse_class_selector()?,
                TokenType::Hash => self.parse_id_selector()?,
                TokenType::LBracket => self.parse_attribute_selector()?,
                TokenType::Colon => self.parse_pseudo_selector()?,
                _ => break,
            };
            children.push(child);
        }

        if children.is_empty() {
            return Err(self.unexpected("Ident"));
        }

        let sequence = self
            .tree
            .create_node(NodeKind::SimpleSelectorSequence, "", location);
        for child in children {
            self.tree.add_child(sequence, child);
        }

        Ok(sequence)
    }

    fn parse_class_selector(&mut self) -> Result<NodeId> {
        log::trace!("parse_class_selector");

        let location = self.current().location;
        self.consume(TokenType::Dot)?;
        let ident = self.consume(TokenType::Ident)?;

        Ok(self
            .tree
            .create_node(NodeKind::ClassSelector, ident.value, location))
    }

    fn parse_id_selector(&mut self) -> Result<NodeId> {
        log::trace!("parse_id_selector");

        let location = self.current().location;
        self.consume(TokenType::Hash)?;
        let ident = self.consume(TokenType::Ident)?;

        Ok(self
            .tree
            .create_node(NodeKind::IdSelector, ident.value, location))
    }
}
