use crate::node::{NodeId, NodeKind};
use crate::parser::Parser;
use crate::tokens::TokenType;
use crate::types::Result;

impl Parser {
    pub(crate) fn parse_selector_list(&mut self) -> Result<NodeId> {
        log::trace!("parse_selector_list");

        let location = self.current().location;

        let mut selectors = vec![self.parse_complex_selector()?];
        while self.current().token_type == TokenType::Comma {
            self.consume_any();
            selectors.push(self.parse_complex_selector()?);
        }

        let list = self
            .tree
            .create_node(NodeKind::SelectorList, "", location);
        for selector in selectors {
            self.tree.add_child(list, selector);
        }

        Ok(list)
    }

    /// ```txt
    /// relative_selector_list
    ///     : relative_selector (',' relative_selector)*
    ///     ;
    /// ```
    ///
    /// Argument list of a functional pseudo-class. Unlike a top-level list,
    /// its selectors may open with a combinator (`:has(> img)`).
    pub(crate) fn parse_relative_selector_list(&mut self) -> Result<NodeId> {
        log::trace!("parse_relative_selector_list");

        let location = self.current().location;

        let mut selectors = vec![self.parse_relative_selector()?];
        while self.current().token_type == TokenType::Comma {
            self.consume_any();
            selectors.push(self.parse_relative_selector()?);
        }

        let list = self
            .tree
            .create_node(NodeKind::SelectorList, "", location);
        for selector in selectors {
            self.tree.add_child(list, selector);
        }

        Ok(list)
    }

    fn parse_relative_selector(&mut self) -> Result<NodeId> {
        log::trace!("parse_relative_selector");

        if !self.current().token_type.is_combinator() {
            return self.parse_complex_selector();
        }

        // a leading combinator relates to an implied universal selector,
        // keeping the selector node shape uniform
        let location = self.current().location;
        let implied = self
            .tree
            .create_node(NodeKind::UniversalSelector, "*", location);
        let sequence = self
            .tree
            .create_node(NodeKind::SimpleSelectorSequence, "", location);
        self.tree.add_child(sequence, implied);

        self.parse_complex_selector_tail(sequence)
    }
}
