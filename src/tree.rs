use crate::location::Location;
use crate::node::{Node, NodeId, NodeKind};
use std::rc::Rc;

/// Attribute record as exposed by [`SelectorTree::attributes`]: the attribute
/// name plus, for operated selectors, the match operator and compared value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeEntry {
    pub name: String,
    pub operator: Option<String>,
    pub value: Option<String>,
}

/// The selector tree is the single owner of all AST nodes. Nodes reference
/// each other through [`NodeId`] handles; the parent link is a back-reference,
/// never an ownership edge.
///
/// All mutation goes through [`add_child`](SelectorTree::add_child) and
/// [`replace_child`](SelectorTree::replace_child), which keep the
/// parent/child links mutually consistent and clear the memoized descendant
/// lists from the mutated node up to the root.
#[derive(Debug, Default)]
pub struct SelectorTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl SelectorTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// The root selector list.
    pub fn root(&self) -> NodeId {
        self.root.unwrap_or(NodeId(0))
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    /// Gets the node with the given id
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Creates a detached node and returns its id. The node is not reachable
    /// from the root until it is attached with [`add_child`](Self::add_child)
    /// or [`replace_child`](Self::replace_child).
    pub fn create_node(
        &mut self,
        kind: NodeKind,
        value: impl Into<String>,
        location: Location,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, kind, value.into(), location));
        id
    }

    /// Appends `child` to `parent`'s children and sets the back-reference.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        self.invalidate_upward(parent);
    }

    /// Swaps the child at `index` for `child`, detaching the old child. An
    /// out-of-range index leaves the tree untouched.
    pub fn replace_child(&mut self, parent: NodeId, index: usize, child: NodeId) {
        if index >= self.nodes[parent.0].children.len() {
            return;
        }

        let old = self.nodes[parent.0].children[index];
        self.nodes[old.0].parent = None;
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children[index] = child;
        self.invalidate_upward(parent);
    }

    fn invalidate_upward(&mut self, from: NodeId) {
        let mut current = Some(from);
        while let Some(id) = current {
            self.nodes[id.0].descendant_cache.get_mut().take();
            current = self.nodes[id.0].parent;
        }
    }

    /// All nodes below `id` in pre-order, `id` itself excluded. The list is
    /// memoized: repeated calls return the same `Rc` until a mutation below
    /// `id` clears it.
    pub fn descendants(&self, id: NodeId) -> Rc<Vec<NodeId>> {
        if let Some(cached) = self.node(id).descendant_cache.borrow().as_ref() {
            return Rc::clone(cached);
        }

        let mut result = Vec::new();
        self.collect_descendants(id, &mut result);

        let result = Rc::new(result);
        *self.node(id).descendant_cache.borrow_mut() = Some(Rc::clone(&result));
        result
    }

    fn collect_descendants(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for &child in &self.node(id).children {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }

    /// Parent, grandparent, and so on up to the root. Not cached.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            result.push(parent);
            current = self.node(parent).parent;
        }
        result
    }

    /// The parent's other children, in order.
    pub fn siblings(&self, id: NodeId) -> Vec<NodeId> {
        match self.node(id).parent {
            Some(parent) => self
                .node(parent)
                .children
                .iter()
                .copied()
                .filter(|&sibling| sibling != id)
                .collect(),
            None => Vec::new(),
        }
    }

    fn self_and_descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = vec![id];
        result.extend(self.descendants(id).iter().copied());
        result
    }

    /// Value of the first id selector at or below `id`, if any.
    pub fn id_value(&self, id: NodeId) -> Option<&str> {
        self.self_and_descendants(id)
            .into_iter()
            .find(|&n| self.node(n).kind == NodeKind::IdSelector)
            .map(|n| self.node(n).value.as_str())
    }

    /// All class selector values at or below `id`, in tree order.
    pub fn classes(&self, id: NodeId) -> Vec<&str> {
        self.self_and_descendants(id)
            .into_iter()
            .filter(|&n| self.node(n).kind == NodeKind::ClassSelector)
            .map(|n| self.node(n).value.as_str())
            .collect()
    }

    /// All attribute selectors at or below `id`, as name/operator/value
    /// records, in tree order.
    pub fn attributes(&self, id: NodeId) -> Vec<AttributeEntry> {
        self.self_and_descendants(id)
            .into_iter()
            .filter(|&n| self.node(n).kind == NodeKind::AttributeSelector)
            .map(|n| self.attribute_entry(n))
            .collect()
    }

    fn attribute_entry(&self, id: NodeId) -> AttributeEntry {
        let node = self.node(id);
        if node.children.is_empty() {
            return AttributeEntry {
                name: node.value.clone(),
                operator: None,
                value: None,
            };
        }

        // operated form: [attribute, operator, value]
        let name = self.node(node.children[0]).value.clone();
        let operator = node.children.get(1).map(|&op| self.node(op).value.clone());
        let value = node.children.get(2).map(|&v| self.node(v).value.clone());
        AttributeEntry {
            name,
            operator,
            value,
        }
    }

    /// Values of every pseudo-class, pseudo-element and functional
    /// pseudo-class at or below `id`, in tree order.
    pub fn pseudo_classes(&self, id: NodeId) -> Vec<&str> {
        self.self_and_descendants(id)
            .into_iter()
            .filter(|&n| self.node(n).kind.is_pseudo())
            .map(|n| self.node(n).value.as_str())
            .collect()
    }

    /// True when the node mixes at least two distinct simple-selector
    /// categories (id, class, attribute, pseudo, type). Two classes alone do
    /// not make a compound selector.
    pub fn is_compound(&self, id: NodeId) -> bool {
        let mut seen = [false; 5];
        for n in self.self_and_descendants(id) {
            let category = match self.node(n).kind {
                NodeKind::IdSelector => 0,
                NodeKind::ClassSelector => 1,
                NodeKind::AttributeSelector => 2,
                NodeKind::PseudoClass | NodeKind::PseudoElement | NodeKind::PseudoFunction => 3,
                NodeKind::TypeSelector | NodeKind::UniversalSelector => 4,
                _ => continue,
            };
            seen[category] = true;
        }
        seen.iter().filter(|&&s| s).count() >= 2
    }

    /// True when a type selector occurs at or below `id`.
    pub fn has_type_selector(&self, id: NodeId) -> bool {
        self.self_and_descendants(id)
            .into_iter()
            .any(|n| self.node(n).kind == NodeKind::TypeSelector)
    }

    /// Serializes the subtree back into selector syntax. The result is
    /// canonical rather than verbatim: whitespace is normalized, attribute
    /// values are double-quoted.
    pub fn to_selector(&self, id: NodeId) -> String {
        let node = self.node(id);
        match node.kind {
            NodeKind::SelectorList => node
                .children
                .iter()
                .map(|&child| self.to_selector(child))
                .collect::<Vec<_>>()
                .join(", "),
            NodeKind::Selector | NodeKind::SimpleSelectorSequence => node
                .children
                .iter()
                .map(|&child| self.to_selector(child))
                .collect(),
            NodeKind::TypeSelector
            | NodeKind::UniversalSelector
            | NodeKind::AnPlusB
            | NodeKind::Attribute
            | NodeKind::Value => node.value.clone(),
            NodeKind::IdSelector => format!("#{}", node.value),
            NodeKind::ClassSelector => format!(".{}", node.value),
            NodeKind::PseudoClass => format!(":{}", node.value),
            NodeKind::PseudoElement => format!("::{}", node.value),
            NodeKind::PseudoFunction => {
                let argument = node
                    .children
                    .first()
                    .map(|&child| self.to_selector(child))
                    .unwrap_or_default();
                format!(":{}({})", node.value, argument)
            }
            NodeKind::AttributeSelector => self.attribute_selector_to_string(node),
            kind if kind.is_attribute_operator() => node.value.clone(),
            NodeKind::Argument => format!("\"{}\"", node.value),
            NodeKind::ChildCombinator => " > ".to_string(),
            NodeKind::AdjacentCombinator => " + ".to_string(),
            NodeKind::SiblingCombinator => " ~ ".to_string(),
            NodeKind::DescendantCombinator => " ".to_string(),
            _ => String::new(),
        }
    }

    fn attribute_selector_to_string(&self, node: &Node) -> String {
        if node.children.is_empty() {
            return format!("[{}]", node.value);
        }

        let name = node
            .children
            .first()
            .map(|&child| self.node(child).value.as_str())
            .unwrap_or_default();
        let operator = node
            .children
            .get(1)
            .map(|&child| self.node(child).value.as_str())
            .unwrap_or_default();
        let value = node
            .children
            .get(2)
            .map(|&child| self.node(child).value.as_str())
            .unwrap_or_default();
        format!("[{}{}\"{}\"]", name, operator, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn leaf(tree: &mut SelectorTree, kind: NodeKind, value: &str) -> NodeId {
        tree.create_node(kind, value, Location::default())
    }

    #[test]
    fn add_child_links_both_directions() {
        let mut tree = SelectorTree::new();
        let parent = leaf(&mut tree, NodeKind::SimpleSelectorSequence, "");
        let child = leaf(&mut tree, NodeKind::TypeSelector, "div");

        tree.add_child(parent, child);

        assert_eq!(tree.node(child).parent, Some(parent));
        assert_eq!(tree.node(parent).children, vec![child]);
    }

    #[test]
    fn replace_child_detaches_the_old_child() {
        let mut tree = SelectorTree::new();
        let parent = leaf(&mut tree, NodeKind::PseudoFunction, "nth-child");
        let old = leaf(&mut tree, NodeKind::SelectorList, "");
        let new = leaf(&mut tree, NodeKind::AnPlusB, "2n+1");
        tree.add_child(parent, old);

        tree.replace_child(parent, 0, new);

        assert_eq!(tree.node(parent).children, vec![new]);
        assert_eq!(tree.node(new).parent, Some(parent));
        assert_eq!(tree.node(old).parent, None);
    }

    #[test]
    fn replace_child_out_of_range_is_a_no_op() {
        let mut tree = SelectorTree::new();
        let parent = leaf(&mut tree, NodeKind::SelectorList, "");
        let child = leaf(&mut tree, NodeKind::TypeSelector, "div");
        tree.add_child(parent, child);

        let stray = leaf(&mut tree, NodeKind::TypeSelector, "p");
        tree.replace_child(parent, 5, stray);

        assert_eq!(tree.node(parent).children, vec![child]);
        assert_eq!(tree.node(stray).parent, None);
    }

    #[test]
    fn descendants_are_preorder_and_cached() {
        let mut tree = SelectorTree::new();
        let root = leaf(&mut tree, NodeKind::SelectorList, "");
        let seq = leaf(&mut tree, NodeKind::SimpleSelectorSequence, "");
        let ty = leaf(&mut tree, NodeKind::TypeSelector, "div");
        let class = leaf(&mut tree, NodeKind::ClassSelector, "foo");
        tree.add_child(root, seq);
        tree.add_child(seq, ty);
        tree.add_child(seq, class);

        let first = tree.descendants(root);
        assert_eq!(*first, vec![seq, ty, class]);

        let second = tree.descendants(root);
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn mutation_invalidates_every_ancestor_cache() {
        let mut tree = SelectorTree::new();
        let root = leaf(&mut tree, NodeKind::SelectorList, "");
        let seq = leaf(&mut tree, NodeKind::SimpleSelectorSequence, "");
        tree.add_child(root, seq);

        let root_before = tree.descendants(root);
        let seq_before = tree.descendants(seq);

        let class = leaf(&mut tree, NodeKind::ClassSelector, "foo");
        tree.add_child(seq, class);

        let root_after = tree.descendants(root);
        let seq_after = tree.descendants(seq);
        assert!(!Rc::ptr_eq(&root_before, &root_after));
        assert!(!Rc::ptr_eq(&seq_before, &seq_after));
        assert_eq!(*root_after, vec![seq, class]);
    }

    #[test]
    fn mutation_keeps_unrelated_caches() {
        let mut tree = SelectorTree::new();
        let root = leaf(&mut tree, NodeKind::SelectorList, "");
        let left = leaf(&mut tree, NodeKind::SimpleSelectorSequence, "");
        let right = leaf(&mut tree, NodeKind::SimpleSelectorSequence, "");
        tree.add_child(root, left);
        tree.add_child(root, right);

        let left_before = tree.descendants(left);
        let class = leaf(&mut tree, NodeKind::ClassSelector, "foo");
        tree.add_child(right, class);

        let left_after = tree.descendants(left);
        assert!(Rc::ptr_eq(&left_before, &left_after));
    }

    #[test]
    fn ancestors_walk_to_the_root() {
        let mut tree = SelectorTree::new();
        let root = leaf(&mut tree, NodeKind::SelectorList, "");
        let seq = leaf(&mut tree, NodeKind::SimpleSelectorSequence, "");
        let ty = leaf(&mut tree, NodeKind::TypeSelector, "div");
        tree.add_child(root, seq);
        tree.add_child(seq, ty);

        assert_eq!(tree.ancestors(ty), vec![seq, root]);
        assert!(tree.ancestors(root).is_empty());
    }

    #[test]
    fn siblings_exclude_self_and_keep_order() {
        let mut tree = SelectorTree::new();
        let root = leaf(&mut tree, NodeKind::SelectorList, "");
        let a = leaf(&mut tree, NodeKind::SimpleSelectorSequence, "");
        let b = leaf(&mut tree, NodeKind::SimpleSelectorSequence, "");
        let c = leaf(&mut tree, NodeKind::SimpleSelectorSequence, "");
        tree.add_child(root, a);
        tree.add_child(root, b);
        tree.add_child(root, c);

        assert_eq!(tree.siblings(b), vec![a, c]);
        assert!(tree.siblings(root).is_empty());
    }
}
