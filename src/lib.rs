//! Parselly parses CSS Selectors Level 3/4 selector strings into a
//! position-annotated AST: type, universal, class, id, attribute, pseudo
//! selectors, functional pseudo-classes (`:is()`, `:where()`, `:has()`,
//! `:not()`, the nth family), combinators and selector lists.
//!
//! ```
//! let tree = parselly::parse("ul > li.item:nth-child(2n+1)").unwrap();
//! assert_eq!(tree.to_selector(tree.root()), "ul > li.item:nth-child(2n+1)");
//! ```

pub mod location;
pub mod node;
pub mod parser;
pub mod sanitize;
pub mod tokenizer;
pub mod tokens;
pub mod tree;
pub mod types;
pub mod walker;

pub use location::Location;
pub use node::{Node, NodeId, NodeKind};
pub use parser::Parser;
pub use sanitize::sanitize;
pub use tree::{AttributeEntry, SelectorTree};
pub use types::{Error, Result};

/// Parse a selector string into a tree rooted at a selector list.
pub fn parse(input: &str) -> Result<SelectorTree> {
    Parser::new(input)?.parse()
}
