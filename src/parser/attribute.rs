use crate::node::{NodeId, NodeKind};
use crate::parser::Parser;
use crate::tokens::TokenType;
use crate::types::Result;

impl Parser {
    /// ```txt
    /// attribute_selector
    ///     : '[' IDENT ']'
    ///     | '[' IDENT attr_matcher (STRING | IDENT) ']'
    ///     ;
    /// ```
    ///
    /// The bare form keeps the attribute name in the selector node itself;
    /// the operated form gets three children: name, operator, value.
    pub(crate) fn parse_attribute_selector(&mut self) -> Result<NodeId> {
        log::trace!("parse_attribute_selector");

        let location = self.current().location;
        self.consume(TokenType::LBracket)?;
        let name = self.consume(TokenType::Ident)?;

        if self.current().token_type == TokenType::RBracket {
            self.consume_any();
            return Ok(self
                .tree
                .create_node(NodeKind::AttributeSelector, name.value, location));
        }

        let operator = self.parse_attribute_operator()?;

        let value = match self.current().token_type {
            TokenType::String | TokenType::Ident => self.consume_any(),
            _ => return Err(self.unexpected("String")),
        };
        let value = self
            .tree
            .create_node(NodeKind::Value, value.value, value.location);

        self.consume(TokenType::RBracket)?;

        let selector = self
            .tree
            .create_node(NodeKind::AttributeSelector, "", location);
        let attribute = self
            .tree
            .create_node(NodeKind::Attribute, name.value, name.location);
        self.tree.add_child(selector, attribute);
        self.tree.add_child(selector, operator);
        self.tree.add_child(selector, value);

        Ok(selector)
    }

    fn parse_attribute_operator(&mut self) -> Result<NodeId> {
        log::trace!("parse_attribute_operator");

        let (kind, value) = match self.current().token_type {
            TokenType::Equal => (NodeKind::EqualOperator, "="),
            TokenType::IncludeMatch => (NodeKind::IncludesOperator, "~="),
            TokenType::DashMatch => (NodeKind::DashMatchOperator, "|="),
            TokenType::PrefixMatch => (NodeKind::PrefixMatchOperator, "^="),
            TokenType::SuffixMatch => (NodeKind::SuffixMatchOperator, "$="),
            TokenType::SubstringMatch => (NodeKind::SubstringMatchOperator, "*="),
            _ => return Err(self.unexpected("Equal")),
        };

        let token = self.consume_any();
        Ok(self.tree.create_node(kind, value, token.location))
    }
}
