//! Removal of syntactically insignificant nodes.
//!
//! The reader keeps whitespace and the `:`/`;` delimiters as nodes so the
//! tree mirrors the source exactly. The compiler only cares about the
//! structure, so those nodes are stripped at every depth first.

use crate::node::SyntaxNode;

/// Removes every `space`, `declarationDelimiter` and `propertyDelimiter`
/// descendant of `node`, in place.
pub fn normalize(node: &mut SyntaxNode) {
    if let Some(children) = node.children_mut() {
        children.retain(|child| !child.kind().is_insignificant());
        for child in children.iter_mut() {
            normalize(child);
        }
    }
}

/// Owned variant of [`normalize`].
pub fn normalized(mut node: SyntaxNode) -> SyntaxNode {
    normalize(&mut node);
    node
}
