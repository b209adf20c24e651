use super::SymExpr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// The exponent of a [`SymExpr::Exp`] is a plain integer and is not visited.
///
/// This iterator is created by [`SymExpr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a SymExpr>,
    last_visited: Option<&'a SymExpr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator starting at the given expression.
    pub fn new(expr: &'a SymExpr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a SymExpr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression is the last visited expression.
    fn is_last_visited(&self, expr: &'a SymExpr) -> bool {
        self.last_visited.map_or(false, |last| std::ptr::eq(last, expr))
    }

    /// Visits the node on top of the stack if its last child was just visited, otherwise pushes
    /// its children.
    fn descend(&mut self, children: &'a [SymExpr]) -> Option<&'a SymExpr> {
        match children.last() {
            Some(last) if !self.is_last_visited(last) => {
                self.stack.extend(children.iter().rev());
                None
            },
            _ => self.visit(),
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a SymExpr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            let visited = match expr {
                SymExpr::Primary(_) => self.visit(),
                SymExpr::Add(terms) => self.descend(terms),
                SymExpr::Mul(factors) => self.descend(factors),
                SymExpr::Exp(base, _) => self.descend(std::slice::from_ref(base.as_ref())),
            };
            if visited.is_some() {
                return visited;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::symbolic::expr::Symbol;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn post_order() {
        // 2x^3 + y
        let expr = SymExpr::Add(vec![
            SymExpr::Mul(vec![
                SymExpr::number(2),
                SymExpr::symbol(Symbol::X).pow(3),
            ]),
            SymExpr::symbol(Symbol::Y),
        ]);

        let visited = expr.post_order_iter()
            .map(|expr| match expr {
                SymExpr::Primary(_) => "primary",
                SymExpr::Add(_) => "add",
                SymExpr::Mul(_) => "mul",
                SymExpr::Exp(..) => "exp",
            })
            .collect::<Vec<_>>();
        assert_eq!(visited, vec!["primary", "primary", "exp", "mul", "primary", "add"]);
    }
}
