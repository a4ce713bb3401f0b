//! Descendant-combinator selector expansion.
//!
//! Given the stack of open selector groups, builds every flat selector the
//! innermost rule applies to:
//!
//! ```text
//! [".a", ".b"]        (outer)
//!   [".c"]            (inner)
//! => ".a .c", ".b .c"
//! ```
//!
//! Starting from the innermost group, each outer level is prefixed onto the
//! working set as a cross product, outer index first. There is no `&` parent
//! reference; nesting always means descendant.

use crate::ir::SelectorGroup;

/// Expands a stack of selector groups (outermost first) into flat selectors.
///
/// An empty stack expands to nothing.
pub fn expand_selectors(stack: &[SelectorGroup]) -> Vec<String> {
    let Some((innermost, outer)) = stack.split_last() else {
        return Vec::new();
    };

    let mut selectors = innermost.clone();
    for group in outer.iter().rev() {
        let mut expanded = Vec::with_capacity(group.len() * selectors.len());
        for prefix in group {
            for selector in &selectors {
                expanded.push(format!("{prefix} {selector}"));
            }
        }
        selectors = expanded;
    }
    selectors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(selectors: &[&str]) -> SelectorGroup {
        selectors.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_level_is_returned_as_is() {
        assert_eq!(expand_selectors(&[group(&[".a", "div"])]), vec![".a", "div"]);
    }

    #[test]
    fn outer_alternatives_multiply_inner() {
        let stack = [group(&[".a", ".b"]), group(&[".c"])];
        assert_eq!(expand_selectors(&stack), vec![".a .c", ".b .c"]);
    }

    #[test]
    fn triple_nesting_cross_product() {
        let stack = [group(&["x"]), group(&["y1", "y2"]), group(&["z"])];
        assert_eq!(expand_selectors(&stack), vec!["x y1 z", "x y2 z"]);
    }

    #[test]
    fn ordering_is_outer_index_then_inner_index() {
        let stack = [group(&["a1", "a2"]), group(&["b1", "b2"])];
        assert_eq!(
            expand_selectors(&stack),
            vec!["a1 b1", "a1 b2", "a2 b1", "a2 b2"]
        );
    }

    #[test]
    fn empty_stack_expands_to_nothing() {
        assert!(expand_selectors(&[]).is_empty());
    }
}
