use std::collections::HashSet;

/// A parsed type annotation.
///
/// `Name` is a single identifier. `Application` is two or more juxtaposed
/// parts (`Maybe a`, `Either e (a -> b)`). `Arrow` is a function type; a chain
/// `a -> b -> c` nests to the right.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Name(String),
    Application(Vec<Type>),
    Arrow(Box<Type>, Box<Type>),
}

impl Type {
    pub fn name(value: impl Into<String>) -> Self {
        Type::Name(value.into())
    }

    /// Juxtapose `parts`. A single part is returned as is.
    pub fn app(mut parts: Vec<Type>) -> Self {
        if parts.len() == 1 {
            parts.remove(0)
        } else {
            Type::Application(parts)
        }
    }

    pub fn arrow(param: Type, result: Type) -> Self {
        Type::Arrow(Box::new(param), Box::new(result))
    }

    pub fn is_arrow(&self) -> bool {
        matches!(self, Type::Arrow(_, _))
    }

    /// Number of parameters along the right spine of arrows.
    pub fn arity(&self) -> usize {
        let mut arity = 0;
        let mut current = self;
        while let Type::Arrow(_, result) = current {
            arity += 1;
            current = result;
        }
        arity
    }

    /// All identifiers, left to right.
    pub fn names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut pending = vec![self];
        while let Some(ty) = pending.pop() {
            match ty {
                Type::Name(name) => names.push(name.as_str()),
                Type::Application(parts) => pending.extend(parts.iter().rev()),
                Type::Arrow(param, result) => {
                    pending.push(result);
                    pending.push(param);
                }
            }
        }
        names
    }

    /// Distinct lowercase identifiers in order of first appearance.
    pub fn free_vars(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.names()
            .into_iter()
            .filter(|name| name.starts_with(|c: char| c.is_lowercase()))
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

// Arrow chains can be arbitrarily long; unlink children onto a worklist
// instead of dropping them recursively.
impl Drop for Type {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut ty) = pending.pop() {
            ty.detach_children(&mut pending);
        }
    }
}

impl Type {
    fn detach_children(&mut self, pending: &mut Vec<Type>) {
        match self {
            Type::Name(_) => {}
            Type::Application(parts) => pending.append(parts),
            Type::Arrow(param, result) => {
                for child in [param, result] {
                    if !matches!(**child, Type::Name(_)) {
                        let child = std::mem::replace(&mut **child, Type::Name(String::new()));
                        pending.push(child);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_collapses_single_part() {
        assert_eq!(Type::app(vec![Type::name("a")]), Type::name("a"));
    }

    #[test]
    fn test_arity() {
        let ty = Type::arrow(
            Type::name("Int"),
            Type::arrow(Type::name("a"), Type::name("b")),
        );
        assert_eq!(ty.arity(), 2);
        assert_eq!(Type::name("Int").arity(), 0);
    }

    #[test]
    fn test_arity_ignores_left_nested_arrows() {
        let ty = Type::arrow(
            Type::arrow(Type::name("a"), Type::name("b")),
            Type::name("c"),
        );
        assert_eq!(ty.arity(), 1);
    }

    #[test]
    fn test_long_chain_helpers_and_drop() {
        let ty = (0..100_000).fold(Type::name("r"), |result, _| {
            Type::arrow(Type::name("a"), result)
        });
        assert_eq!(ty.arity(), 100_000);
        assert_eq!(ty.names().len(), 100_001);
        drop(ty);
    }

    #[test]
    fn test_names_in_order() {
        let ty = Type::arrow(
            Type::app(vec![Type::name("Maybe"), Type::name("a")]),
            Type::name("Int"),
        );
        assert_eq!(ty.names(), vec!["Maybe", "a", "Int"]);
    }

    #[test]
    fn test_free_vars_are_distinct_and_lowercase() {
        let ty = Type::arrow(
            Type::app(vec![Type::name("Either"), Type::name("e"), Type::name("a")]),
            Type::arrow(Type::name("a"), Type::name("e")),
        );
        assert_eq!(ty.free_vars(), vec!["e", "a"]);
    }
}
