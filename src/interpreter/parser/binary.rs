use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{MAX_DEPTH, ParseResult},
            utils::unexpected,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
///
/// # Errors
/// [`ParseError::TooDeep`] once the expression holds more than
/// [`MAX_DEPTH`] operators at both precedence levels together.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut operators = 0;
    let mut left = parse_multiplicative(tokens, &mut operators)?;
    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        let line = *line;
        count_operator(&mut operators, line)?;
        tokens.next();
        let right = parse_multiplicative(tokens, &mut operators)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative binary operators: `*` and `/`. They bind tighter
/// than `+` and `-`.
///
/// The rule is: `multiplicative := factor (("*" | "/") factor)*`
///
/// `operators` is the running operator count of the enclosing expression.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   operators: &mut usize)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_factor(tokens)?;
    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        let line = *line;
        count_operator(operators, line)?;
        tokens.next();
        let right = parse_factor(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Parses a factor: an integer literal or a variable reference.
///
/// There is no grouping syntax, so a factor never contains another
/// expression.
///
/// The rule is: `factor := NUMBER | IDENT`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next_if(|(token, _)| matches!(token, Token::Number(_) | Token::Identifier(_))) {
        Some((Token::Number(value), line)) => Ok(Expr::Number { value: *value,
                                                                line:  *line, }),
        Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                     line: *line, }),
        _ => Err(unexpected(tokens, "NUMBER or IDENT")),
    }
}

/// Counts one more operator in the current expression.
///
/// Evaluating a chain of operators recurses once per operator, so the count
/// is capped at [`MAX_DEPTH`].
fn count_operator(operators: &mut usize, line: usize) -> ParseResult<()> {
    *operators += 1;
    if *operators > MAX_DEPTH {
        return Err(ParseError::TooDeep { line,
                                         limit: MAX_DEPTH });
    }
    Ok(())
}

/// Maps an operator token to its [`BinaryOperator`].
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
