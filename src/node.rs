use crate::location::Location;
use std::cell::RefCell;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

/// Handle to a node inside a [`SelectorTree`](crate::tree::SelectorTree).
/// Parent links and child lists are stored as ids, never as owning pointers.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl Debug for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    SelectorList,
    Selector,
    SimpleSelectorSequence,
    TypeSelector,
    UniversalSelector,
    IdSelector,
    ClassSelector,
    AttributeSelector,
    PseudoClass,
    PseudoElement,
    PseudoFunction,
    /// Attribute name inside an operated attribute selector
    Attribute,
    /// Attribute value inside an operated attribute selector
    Value,
    EqualOperator,
    IncludesOperator,
    DashMatchOperator,
    PrefixMatchOperator,
    SuffixMatchOperator,
    SubstringMatchOperator,
    /// String literal argument of a functional pseudo-class
    Argument,
    AnPlusB,
    ChildCombinator,
    AdjacentCombinator,
    SiblingCombinator,
    DescendantCombinator,
}

impl NodeKind {
    pub fn is_combinator(&self) -> bool {
        matches!(
            self,
            NodeKind::ChildCombinator
                | NodeKind::AdjacentCombinator
                | NodeKind::SiblingCombinator
                | NodeKind::DescendantCombinator
        )
    }

    pub fn is_attribute_operator(&self) -> bool {
        matches!(
            self,
            NodeKind::EqualOperator
                | NodeKind::IncludesOperator
                | NodeKind::DashMatchOperator
                | NodeKind::PrefixMatchOperator
                | NodeKind::SuffixMatchOperator
                | NodeKind::SubstringMatchOperator
        )
    }

    pub fn is_pseudo(&self) -> bool {
        matches!(
            self,
            NodeKind::PseudoClass | NodeKind::PseudoElement | NodeKind::PseudoFunction
        )
    }
}

/// A node is a single element in the AST: a kind, an optional string value
/// (empty when absent), a back-reference to the parent, and the child ids in
/// source order.
#[derive(Debug)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) kind: NodeKind,
    pub(crate) value: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) location: Location,
    /// Memoized pre-order descendant list. Cleared upward through the parent
    /// chain on every mutation; only the tree's mutation gateways touch it.
    pub(crate) descendant_cache: RefCell<Option<Rc<Vec<NodeId>>>>,
}

impl Node {
    pub(crate) fn new(id: NodeId, kind: NodeKind, value: String, location: Location) -> Self {
        Node {
            id,
            kind,
            value,
            parent: None,
            children: Vec::new(),
            location,
            descendant_cache: RefCell::new(None),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
