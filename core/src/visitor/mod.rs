//! Traversal over parsed expression trees.
//!
//! [`walk`] yields every node of a tree exactly once, in pre-order
//! (a node before its children, children left to right). The traversal keeps
//! an explicit stack, so arbitrarily deep trees cannot overflow the call stack.

use crate::parser::Expr;

/// Pre-order iterator over an expression tree.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<&'a Expr<'a>>,
}

/// Walk every node reachable from `root`, starting with `root` itself.
pub fn walk<'a>(root: &'a Expr<'a>) -> Walk<'a> {
    let mut stack = Vec::with_capacity(16);
    stack.push(root);
    Walk { stack }
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Expr<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let expr = self.stack.pop()?;
        // Children are pushed in reverse so the leftmost is visited first.
        match expr {
            Expr::Binary { left, right, .. } => {
                self.stack.push(right);
                self.stack.push(left);
            }
            Expr::Unary { expr: inner, .. } => self.stack.push(inner),
            Expr::Call { callable, args } => {
                self.stack.extend(args.iter().rev().copied());
                self.stack.push(callable);
            }
            Expr::Attribute { value, .. } => self.stack.push(value),
            Expr::Literal(_) | Expr::Ident(_) => {}
        }
        Some(expr)
    }
}

impl<'a> Expr<'a> {
    /// Iterate over this node and all of its descendants.
    pub fn walk(&'a self) -> Walk<'a> {
        walk(self)
    }
}

#[cfg(test)]
mod tests;
