use std::fmt;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Expressions are built from integer literals and variable references joined
/// by the four arithmetic operators. There is no grouping syntax, so the tree
/// shape is fully determined by precedence and left associativity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A non-negative integer literal.
    Number {
        /// The constant value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use alpha::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. } | Self::Variable { line, .. } | Self::BinaryOp { line, .. } => {
                *line
            },
        }
    }
}

/// The test of a `while` loop: two expressions compared for equality or
/// inequality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Left-hand expression.
    pub left:  Expr,
    /// `==` or `!=`.
    pub op:    Comparison,
    /// Right-hand expression.
    pub right: Expr,
}

/// Represents a statement.
///
/// Statements are the units a program and a loop body are made of. Every
/// variant records the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `< expr`: appends the decimal value of `expr` to the output.
    Print {
        /// The expression to print, usually a single variable.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `> name`: binds the next supplied value for `name`, or pauses.
    Input {
        /// The name of the variable to read.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `while cond ... end`.
    While {
        /// Checked before every iteration.
        condition: Condition,
        /// Statements executed in order on each iteration.
        body:      Vec<Self>,
        /// Line number of the `while` keyword.
        line:      usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Assignment { line, .. }
            | Self::Print { line, .. }
            | Self::Input { line, .. }
            | Self::While { line, .. } => *line,
        }
    }
}

/// A parsed program: the ordered top-level statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Floor division (`/`)
    Div,
}

/// Represents a comparison allowed in a loop condition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "=="),
            Self::NotEqual => write!(f, "!="),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

impl Program {
    fn fmt_block(f: &mut fmt::Formatter<'_>, statements: &[Statement], depth: usize) -> fmt::Result {
        let indent = "    ".repeat(depth);
        for statement in statements {
            match statement {
                Statement::Assignment { name, value, .. } => writeln!(f, "{indent}{name} = {value}")?,
                Statement::Print { expr, .. } => writeln!(f, "{indent}< {expr}")?,
                Statement::Input { name, .. } => writeln!(f, "{indent}> {name}")?,
                Statement::While { condition, body, .. } => {
                    writeln!(f, "{indent}while {condition}")?;
                    Self::fmt_block(f, body, depth + 1)?;
                    writeln!(f, "{indent}end")?;
                },
            }
        }
        Ok(())
    }
}

/// Pretty-prints the program with explicit parentheses around every binary
/// operation, one statement per line.
///
/// The output shows how the parser grouped each expression. alpha has no
/// grouping syntax, so it is meant for inspection and is not valid source
/// whenever an expression contains an operator.
///
/// ## Example
/// ```
/// use alpha::parse;
///
/// let program = parse("x = 1 + 2 * 3\nwhile x != 0\nx = x - 1\nend").unwrap();
/// assert_eq!(program.to_string(),
///            "x = (1 + (2 * 3))\nwhile x != 0\n    x = (x - 1)\nend\n");
/// ```
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_block(f, &self.statements, 0)
    }
}
