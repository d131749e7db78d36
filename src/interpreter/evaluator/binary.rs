use crate::{
    ast::{BinaryOperator, Comparison, Condition},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::floor_div_checked,
};

impl Context<'_> {
    /// Evaluates an integer arithmetic operation.
    ///
    /// Addition, subtraction and multiplication are checked for overflow.
    /// Division rounds toward negative infinity, so `-7 / 2` is `-4`, and
    /// division by zero is reported instead of being silently handled.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use alpha::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, -7, 2, 1), Ok(-4));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 7, -2, 1), Ok(-4));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 1, 0, 1),
    ///            Err(RuntimeError::DivisionByZero { line: 1 }));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mul, i64::MAX, 2, 4),
    ///            Err(RuntimeError::Overflow { line: 4 }));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
        let result = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                floor_div_checked(left, right)
            },
        };

        result.ok_or(RuntimeError::Overflow { line })
    }

    /// Evaluates a loop condition.
    ///
    /// Both sides are evaluated left to right and compared as integers.
    pub fn eval_condition(&self, condition: &Condition) -> EvalResult<bool> {
        let left = self.eval(&condition.left)?;
        let right = self.eval(&condition.right)?;

        Ok(match condition.op {
            Comparison::Equal => left == right,
            Comparison::NotEqual => left != right,
        })
    }
}
