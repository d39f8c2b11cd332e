//! Pretty printing for type annotations
//!
//! [`Type::pretty`] produces the canonical form: single spaces between parts,
//! `->` surrounded by spaces, and only the parentheses needed to read the tree
//! back unchanged. Arrows associate to the right, so `a -> (b -> c)` prints as
//! `a -> b -> c` while `(a -> b) -> c` keeps its parentheses.
//!
//! [`Type::structure`] dumps the tree itself, which is handy when checking how
//! an annotation was grouped.

use std::fmt::{self, Display};

use crate::ast::Type;

impl Type {
    pub fn pretty(&self) -> String {
        // Walk the right spine of arrows iteratively; only parenthesized
        // groups recurse.
        let mut out = String::new();
        let mut current = self;
        while let Type::Arrow(param, result) = current {
            if param.is_arrow() {
                out.push_str(&format!("({})", param.pretty()));
            } else {
                out.push_str(&param.pretty());
            }
            out.push_str(" -> ");
            current = result;
        }
        if let Type::Name(name) = current {
            out.push_str(name);
        } else if let Type::Application(parts) = current {
            let parts: Vec<_> = parts
                .iter()
                .map(|part| match part {
                    Type::Name(name) => name.clone(),
                    _ => format!("({})", part.pretty()),
                })
                .collect();
            out.push_str(&parts.join(" "));
        }
        out
    }

    pub fn structure(&self) -> String {
        let mut out = String::new();
        let mut open = 0;
        let mut current = self;
        while let Type::Arrow(param, result) = current {
            out.push_str(&format!("Arrow({}, ", param.structure()));
            open += 1;
            current = result;
        }
        if let Type::Name(name) = current {
            out.push_str(name);
        } else if let Type::Application(parts) = current {
            let parts: Vec<_> = parts.iter().map(Type::structure).collect();
            out.push_str(&format!("Application([{}])", parts.join(", ")));
        }
        out.push_str(&")".repeat(open));
        out
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
