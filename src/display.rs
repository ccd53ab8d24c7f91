//! Sideways rendering of a tree: the right subtree is printed above its parent and the left
//! subtree below, so the output reads like the tree rotated a quarter turn counter-clockwise.

use std::fmt;

use crate::tree::{Node, Tree};

/// Pending work while rendering: a subtree still to be laid out, or a single line to write.
enum Step<'a, T> {
    Subtree(&'a Node<T>, String, bool),
    Line(&'a Node<T>, String, bool),
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    // A reverse in-order walk (right, node, left) on an explicit stack, so deep trees render
    // without recursing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<Step<'_, T>> = self
            .root()
            .map(|root| Step::Subtree(root, String::new(), true))
            .into_iter()
            .collect();

        while let Some(step) = stack.pop() {
            match step {
                Step::Line(node, prefix, is_left) => {
                    let connector = if is_left { "└── " } else { "┌── " };
                    writeln!(f, "{}{}{}", prefix, connector, node.value())?;
                }
                Step::Subtree(node, prefix, is_left) => {
                    if let Some(left) = node.left() {
                        let indent = if is_left { "    " } else { "│   " };
                        stack.push(Step::Subtree(left, format!("{}{}", prefix, indent), true));
                    }
                    let right_prefix = node.right().map(|right| {
                        let indent = if is_left { "│   " } else { "    " };
                        (right, format!("{}{}", prefix, indent))
                    });
                    stack.push(Step::Line(node, prefix, is_left));
                    if let Some((right, prefix)) = right_prefix {
                        stack.push(Step::Subtree(right, prefix, false));
                    }
                }
            }
        }

        Ok(())
    }
}
