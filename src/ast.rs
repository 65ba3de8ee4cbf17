use derive_more::Display;

use crate::token::TokenType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BinaryOp {
    #[display(fmt = "-")]
    Minus,
    #[display(fmt = "+")]
    Plus,
    #[display(fmt = "*")]
    Star,
    #[display(fmt = "/")]
    Slash,
}

impl TryFrom<TokenType> for BinaryOp {
    type Error = TokenType;

    fn try_from(kind: TokenType) -> Result<Self, Self::Error> {
        match kind {
            TokenType::Minus => Ok(BinaryOp::Minus),
            TokenType::Plus => Ok(BinaryOp::Plus),
            TokenType::Star => Ok(BinaryOp::Star),
            TokenType::Slash => Ok(BinaryOp::Slash),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOpNode {
    pub lhs: Box<Expression>,
    pub op: BinaryOp,
    pub rhs: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(f64),
    Binary(BinaryOpNode),
}

impl Expression {
    pub fn binary(lhs: Expression, op: BinaryOp, rhs: Expression) -> Self {
        Expression::Binary(BinaryOpNode {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        })
    }

    fn is_leaf(&self) -> bool {
        matches!(self, Expression::Literal(_))
    }
}

// Flattens the subtree before it is freed: a left-leaning chain of operators is
// as deep as it is long, and the derived drop would recurse once per node.
impl Drop for BinaryOpNode {
    fn drop(&mut self) {
        if self.lhs.is_leaf() && self.rhs.is_leaf() {
            return;
        }

        let mut pending = vec![take_child(&mut self.lhs), take_child(&mut self.rhs)];
        while let Some(expr) = pending.pop() {
            if let Expression::Binary(mut node) = expr {
                pending.push(take_child(&mut node.lhs));
                pending.push(take_child(&mut node.rhs));
            }
        }
    }
}

fn take_child(slot: &mut Expression) -> Expression {
    std::mem::replace(slot, Expression::Literal(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_long_chain_without_recursion() {
        let mut expr = Expression::Literal(1.0);
        for _ in 0..200_000 {
            expr = Expression::binary(expr, BinaryOp::Minus, Expression::Literal(1.0));
        }
        drop(expr);
    }

    #[test]
    fn operator_from_token_type() {
        assert_eq!(BinaryOp::try_from(TokenType::Slash), Ok(BinaryOp::Slash));
        assert_eq!(BinaryOp::try_from(TokenType::LeftParen), Err(TokenType::LeftParen));
    }
}
