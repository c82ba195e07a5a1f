use crate::node::NodeId;
use crate::tree::SelectorTree;
use std::io::Write;

/// Walks a selector tree and dumps it as an indented node list, mostly
/// useful for debugging parser output.
pub struct Walker<'a> {
    tree: &'a SelectorTree,
}

impl<'a> Walker<'a> {
    pub fn new(tree: &'a SelectorTree) -> Self {
        Self { tree }
    }

    /// Prints the tree to stdout
    pub fn walk_stdout(&self) {
        let _ = self.walk(&mut std::io::stdout());
    }

    pub fn walk(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        self.inner_walk(self.tree.root(), 0, writer)
    }

    fn inner_walk(&self, id: NodeId, depth: usize, writer: &mut dyn Write) -> std::io::Result<()> {
        let node = match self.tree.get(id) {
            Some(node) => node,
            None => return Ok(()),
        };

        let prefix = " ".repeat(depth * 2);
        if node.value().is_empty() {
            writeln!(writer, "{}[{:?} ({})]", prefix, node.kind(), node.children().len())?;
        } else {
            writeln!(writer, "{}[{:?}] {}", prefix, node.kind(), node.value())?;
        }

        for &child in node.children() {
            self.inner_walk(child, depth + 1, writer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    #[test]
    fn walk_writes_an_indented_dump() {
        let tree = Parser::new("div > p.note").unwrap().parse().unwrap();

        let mut out = Vec::new();
        Walker::new(&tree).walk(&mut out).unwrap();
        let dump = String::from_utf8(out).unwrap();

        assert!(dump.starts_with("[SelectorList (1)]\n"));
        assert!(dump.contains("[TypeSelector] div"));
        assert!(dump.contains("[ClassSelector] note"));
        // children are one level deeper than their parent
        assert!(dump.contains("\n  [Selector (3)]"));
    }
}
