use crate::node::{NodeId, NodeKind};
use crate::parser::nth::NTH_FUNCTION_NAMES;
use crate::parser::Parser;
use crate::tokens::TokenType;
use crate::types::Result;

impl Parser {
    /// ```txt
    /// pseudo_element    : ':' ':' IDENT ;
    /// pseudo_class      : ':' IDENT
    ///                   | ':' IDENT '(' any_value ')'
    ///                   ;
    /// ```
    pub(crate) fn parse_pseudo_selector(&mut self) -> Result<NodeId> {
        log::trace!("parse_pseudo_selector");

        let location = self.current().location;
        self.consume(TokenType::Colon)?;

        if self.current().token_type == TokenType::Colon {
            self.consume_any();
            let ident = self.consume(TokenType::Ident)?;
            return Ok(self
                .tree
                .create_node(NodeKind::PseudoElement, ident.value, location));
        }

        let ident = self.consume(TokenType::Ident)?;

        if self.current().token_type != TokenType::LParen {
            return Ok(self
                .tree
                .create_node(NodeKind::PseudoClass, ident.value, location));
        }

        self.consume_any();
        let function =
            self.tree
                .create_node(NodeKind::PseudoFunction, ident.value.clone(), location);
        let argument = self.parse_pseudo_function_argument(&ident.value)?;
        self.tree.add_child(function, argument);
        self.consume(TokenType::RParen)?;

        Ok(function)
    }

    /// ```txt
    /// any_value
    ///     : STRING
    ///     | an_plus_b
    ///     | relative_selector_list
    ///     ;
    /// ```
    ///
    /// The step-expression branch only applies to the nth-family functions;
    /// there the sign tokens shift into the expression instead of reducing
    /// the identifier to a one-element selector list.
    fn parse_pseudo_function_argument(&mut self, name: &str) -> Result<NodeId> {
        log::trace!("parse_pseudo_function_argument");

        if self.current().token_type == TokenType::String {
            let token = self.consume_any();
            return Ok(self
                .tree
                .create_node(NodeKind::Argument, token.value, token.location));
        }

        if NTH_FUNCTION_NAMES.contains(&name) {
            if let Some(expression) = self.parse_nth_expression() {
                return Ok(expression);
            }
        }

        self.parse_relative_selector_list()
    }
}
