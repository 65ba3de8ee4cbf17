use log::trace;

use super::error::Error;
use crate::ast::{BinaryOp, BinaryOpNode, Expression};

enum Work<'e> {
    Visit(&'e Expression),
    Apply(BinaryOp),
}

#[derive(Debug)]
struct Stack(Vec<f64>);

impl Stack {
    fn push(&mut self, v: f64) {
        self.0.push(v)
    }

    fn pop(&mut self) -> f64 {
        self.0.pop().expect("popped an empty stack")
    }
}

/// Post-order walk with an explicit work list, so long operator chains do
/// not grow the native stack. Operands are evaluated left, then right.
pub fn evaluate(expr: &Expression) -> Result<f64, Error> {
    let mut work = vec![Work::Visit(expr)];
    let mut stack = Stack(vec![]);

    while let Some(item) = work.pop() {
        match item {
            Work::Visit(Expression::Literal(value)) => stack.push(*value),
            Work::Visit(Expression::Binary(BinaryOpNode { lhs, op, rhs })) => {
                work.push(Work::Apply(*op));
                work.push(Work::Visit(rhs));
                work.push(Work::Visit(lhs));
            }
            Work::Apply(op) => {
                let r = stack.pop();
                let l = stack.pop();
                let v = binary_number(l, op, r)?;
                trace!("{} {} {} = {}", l, op, r, v);
                stack.push(v);
            }
        }
    }

    Ok(stack.pop())
}

fn binary_number(l: f64, op: BinaryOp, r: f64) -> Result<f64, Error> {
    let v = match op {
        BinaryOp::Minus => l - r,
        BinaryOp::Plus => l + r,
        BinaryOp::Star => l * r,
        BinaryOp::Slash => {
            if r == 0.0 {
                return Err(Error::DivideByZero);
            }
            l / r
        }
    };
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse, scan};

    fn eval_str(input: &str) -> Result<f64, Error> {
        let output = scan(input);
        let expr = parse(&output.tokens).expect("input should parse");
        evaluate(&expr)
    }

    #[test]
    fn literal_evaluates_to_itself() {
        for (input, expected) in [("0", 0.0), ("7", 7.0), ("3.5", 3.5), ("1024.0625", 1024.0625)] {
            assert_eq!(eval_str(input), Ok(expected), "input {:?}", input);
        }
    }

    #[test]
    fn respects_precedence() {
        assert_eq!(eval_str("2 + 3 * 4"), Ok(14.0));
        assert_eq!(eval_str("(2 + 3) * 4"), Ok(20.0));
        assert_eq!(eval_str("10 - 6 / 2"), Ok(7.0));
    }

    #[test]
    fn is_left_associative() {
        assert_eq!(eval_str("8 - 3 - 2"), Ok(3.0));
        assert_eq!(eval_str("16 / 4 / 2"), Ok(2.0));
    }

    #[test]
    fn ignores_whitespace() {
        assert_eq!(eval_str("1+1"), Ok(2.0));
        assert_eq!(eval_str("1 + 1"), Ok(2.0));
        assert_eq!(eval_str("\t1\n+\n1 "), Ok(2.0));
    }

    #[test]
    fn evaluates_nested_groups() {
        assert_eq!(eval_str("5 * (2 - (3 + 4))"), Ok(-25.0));
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(eval_str("1 / 0"), Err(Error::DivideByZero));
        assert_eq!(eval_str("0 / 0"), Err(Error::DivideByZero));
        assert_eq!(eval_str("4 / (2 - 2)"), Err(Error::DivideByZero));
        assert_eq!(eval_str("4 / (0 * (0 - 1))"), Err(Error::DivideByZero));
    }

    #[test]
    fn evaluates_hand_built_tree() {
        let expr = Expression::binary(
            Expression::Literal(1.5),
            BinaryOp::Star,
            Expression::binary(Expression::Literal(4.0), BinaryOp::Minus, Expression::Literal(2.0)),
        );
        assert_eq!(evaluate(&expr), Ok(3.0));
    }

    #[test]
    fn evaluates_long_chain_without_recursion() {
        let mut expr = Expression::Literal(0.0);
        for _ in 0..200_000 {
            expr = Expression::binary(expr, BinaryOp::Plus, Expression::Literal(1.0));
        }
        assert_eq!(evaluate(&expr), Ok(200_000.0));
        drop(expr);
    }

    #[test]
    fn error_stops_evaluation_inside_chain() {
        assert_eq!(eval_str("1 + 2 / 0 + 3"), Err(Error::DivideByZero));
    }
}
