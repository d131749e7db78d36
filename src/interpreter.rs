/// The evaluator module executes AST nodes and produces program output.
///
/// The evaluator walks the AST against a fresh variable store, performs
/// integer arithmetic, consumes supplied input values and decides whether a
/// call completes, pauses or fails.
///
/// # Responsibilities
/// - Evaluates statements and expressions.
/// - Implements the pause protocol for input statements.
/// - Reports runtime errors such as division by zero or unbound variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a list of tokens, each
/// corresponding to a number, a name, a keyword or an operator, and each
/// tagged with its source line.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line information.
/// - Stops at the first `;`, which marks the end of input.
/// - Reports lexical errors for unknown characters and oversized literals.
pub mod lexer;
/// The outcome module defines what a single call hands back to the host.
///
/// A call completes, pauses waiting for a named input, or fails. Each outcome
/// carries the full output produced by that call, and serializes to the
/// response shapes hosts send over the wire.
pub mod outcome;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token list produced by the lexer and constructs
/// the program tree by recursive descent with one token of lookahead.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting errors with line info.
/// - Detects loops that are never closed.
pub mod parser;
