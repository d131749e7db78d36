/// Entry points of the parser.
///
/// Contains the result type, the program-level loop and the expression entry
/// point every other parsing routine starts from.
pub mod core;

/// Arithmetic expression parsing.
///
/// Implements the two precedence levels (`+`/`-` and `*`/`/`) and the factors
/// they combine.
pub mod binary;

/// Statement parsing.
///
/// Parses assignments, print and input statements, and `while` loops together
/// with their conditions and bodies.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides token lookahead and the `expect`-style helpers shared by the
/// grammar rules.
pub mod utils;
