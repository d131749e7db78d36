use alpha::{
    ast::{BinaryOperator, Comparison, Expr, Statement},
    error::{Error, LexError, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::MAX_DEPTH,
    },
    parse, tokenize,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap_or_else(|e| panic!("Failed to tokenize {source:?}: {e}"))
                    .iter()
                    .map(|(token, _)| token.kind())
                    .collect()
}

#[test]
fn every_operator_has_a_token() {
    use TokenKind::{Assign, Div, Eof, Eq, Ident, Input, Minus, Mul, Ne, Number, Plus, Print};

    assert_eq!(kinds("a = 1 + 2 - 3 * 4 / 5"),
               vec![Ident, Assign, Number, Plus, Number, Minus, Number, Mul, Number, Div, Number, Eof]);
    assert_eq!(kinds("a == b != c"), vec![Ident, Eq, Ident, Ne, Ident, Eof]);
    assert_eq!(kinds("< a > b"), vec![Print, Ident, Input, Ident, Eof]);
    assert_eq!(kinds("a==b"), vec![Ident, Eq, Ident, Eof]);
}

#[test]
fn keywords_and_identifiers() {
    let tokens = tokenize("while end whiles ends x1").unwrap();
    let tokens: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
    assert_eq!(tokens,
               vec![Token::While,
                    Token::End,
                    Token::Identifier("whiles".into()),
                    Token::Identifier("ends".into()),
                    Token::Identifier("x1".into()),
                    Token::Eof]);
}

#[test]
fn digits_then_letters_split_into_two_tokens() {
    let tokens = tokenize("12ab").unwrap();
    assert_eq!(tokens[0].0, Token::Number(12));
    assert_eq!(tokens[1].0, Token::Identifier("ab".into()));
}

#[test]
fn tokens_remember_their_line() {
    let tokens = tokenize("x = 1\n\n< x").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|(_, line)| *line).collect();
    assert_eq!(lines, vec![1, 1, 1, 3, 3, 3]);
}

#[test]
fn semicolon_is_end_of_input() {
    assert_eq!(kinds("< x ; < y"), vec![TokenKind::Print, TokenKind::Ident, TokenKind::Eof]);
    assert!(tokenize("x = 1 ; # ! $").is_ok());
}

#[test]
fn lex_errors_report_position() {
    let err = tokenize("x = 1\n  y = #").unwrap_err();
    assert_eq!(err,
               Error::Lex(LexError::UnexpectedCharacter { character: '#',
                                                          line:      2,
                                                          column:    7, }));

    let err = tokenize("a != b\na ! b").unwrap_err();
    assert!(matches!(err,
                     Error::Lex(LexError::UnexpectedCharacter { character: '!',
                                                                line: 2,
                                                                column: 3 })));
    assert!(err.to_string().contains("line 2, column 3"));
}

#[test]
fn underscores_are_not_identifiers() {
    let err = tokenize("my_var = 1").unwrap_err();
    assert!(matches!(err, Error::Lex(LexError::UnexpectedCharacter { character: '_', .. })));
}

#[test]
fn expressions_are_left_associative() {
    let program = parse("x = 1 - 2 - 3").unwrap();
    let Statement::Assignment { value, .. } = &program.statements[0] else {
        panic!("expected an assignment");
    };

    let Expr::BinaryOp { left, op, right, .. } = value else {
        panic!("expected a binary operation");
    };
    assert_eq!(*op, BinaryOperator::Sub);
    assert!(matches!(**right, Expr::Number { value: 3, .. }));
    assert!(matches!(**left, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
}

#[test]
fn multiplication_binds_tighter() {
    let program = parse("x = 1 + 2 * 3 - 4 / 2").unwrap();
    assert_eq!(program.to_string(), "x = ((1 + (2 * 3)) - (4 / 2))\n");
}

#[test]
fn while_loops_nest() {
    let program = parse("while a != 0\nwhile b == 1\n< b\nend\n> a\nend").unwrap();
    assert_eq!(program.statements.len(), 1);

    let Statement::While { condition, body, line } = &program.statements[0] else {
        panic!("expected a loop");
    };
    assert_eq!(*line, 1);
    assert_eq!(condition.op, Comparison::NotEqual);
    assert_eq!(body.len(), 2);
    assert!(matches!(&body[0], Statement::While { body, line: 2, .. } if body.len() == 1));
    assert!(matches!(&body[1], Statement::Input { name, line: 5 } if name == "a"));
}

#[test]
fn pretty_printing_shows_structure() {
    let source = "i = 0\nwhile i != 2\n> x\n< x * i\ni = i + 1\nend";
    let program = parse(source).unwrap();
    assert_eq!(program.to_string(),
               "i = 0\nwhile i != 2\n    > x\n    < (x * i)\n    i = (i + 1)\nend\n");
}

#[test]
fn parse_error_names_expected_and_found() {
    let err = parse("x = 1\n> 5").unwrap_err();
    assert_eq!(err,
               Error::Parse(ParseError::UnexpectedToken { expected: "IDENT".into(),
                                                          found:    TokenKind::Number,
                                                          line:     2, }));
    assert_eq!(err.to_string(), "Error on line 2: Expected IDENT, got NUMBER.");
}

#[test]
fn factor_must_be_number_or_name() {
    let err = parse("x = 1 + * 2").unwrap_err();
    assert!(matches!(err,
                     Error::Parse(ParseError::UnexpectedToken { found: TokenKind::Mul, .. })));
    assert!(err.to_string().contains("Expected NUMBER or IDENT"));

    let err = parse("x =").unwrap_err();
    assert!(matches!(err,
                     Error::Parse(ParseError::UnexpectedToken { found: TokenKind::Eof, .. })));
}

#[test]
fn statements_cannot_start_with_an_operator() {
    let err = parse("x = 1\n+ 2").unwrap_err();
    assert!(matches!(err,
                     Error::Parse(ParseError::UnexpectedToken { found: TokenKind::Plus,
                                                                line: 2,
                                                                .. })));
}

#[test]
fn condition_requires_equality_operator() {
    let err = parse("while x\nend").unwrap_err();
    assert_eq!(err,
               Error::Parse(ParseError::InvalidCondition { found: TokenKind::End,
                                                           line:  2, }));
}

#[test]
fn identifiers_and_whitespace_are_unicode() {
    let tokens = tokenize("größe = 1\nπ2 = größe").unwrap();
    assert_eq!(tokens[0].0, Token::Identifier("größe".into()));
    assert_eq!(tokens[3], (Token::Identifier("π2".into()), 2));

    assert_eq!(kinds("x\u{a0}=\u{2003}5\u{3000}"),
               vec![TokenKind::Ident, TokenKind::Assign, TokenKind::Number, TokenKind::Eof]);

    let err = tokenize("a = 1\n  b = é€").unwrap_err();
    assert_eq!(err,
               Error::Lex(LexError::UnexpectedCharacter { character: '€',
                                                          line:      2,
                                                          column:    8, }));
}

#[test]
fn skipped_input_never_becomes_a_token() {
    let tokens = tokenize("\n  x = 1 \t\r\n\n< x\n").unwrap();
    assert!(tokens.iter()
                  .all(|(token, _)| !matches!(token, Token::NewLine | Token::Ignored)));
    assert_eq!(tokens.iter().filter(|(token, _)| *token == Token::Eof).count(), 1);
}

#[test]
fn pretty_printed_expressions_are_not_source() {
    let program = parse("x = 1 + 2").unwrap();
    assert_eq!(program.to_string(), "x = (1 + 2)\n");
    assert!(matches!(parse(&program.to_string()),
                     Err(Error::Lex(LexError::UnexpectedCharacter { character: '(', .. }))));

    let program = parse("x = 1\nwhile x != 0\n< x\nx = y\nend").unwrap();
    assert_eq!(parse(&program.to_string()), Ok(program));
}

#[test]
fn nesting_is_limited() {
    let nested = |depth: usize| format!("{}{}", "while x == 1\n".repeat(depth), "end\n".repeat(depth));

    assert!(parse(&nested(MAX_DEPTH)).is_ok());
    assert_eq!(parse(&nested(10_000)),
               Err(Error::Parse(ParseError::TooDeep { line:  MAX_DEPTH + 1,
                                                      limit: MAX_DEPTH, })));
}

#[test]
fn expression_length_is_limited() {
    let chain = |operators: usize| format!("x = 1{}", " + 2 * 3".repeat(operators / 2));

    assert!(parse(&chain(MAX_DEPTH)).is_ok());
    assert_eq!(parse(&chain(10_000)),
               Err(Error::Parse(ParseError::TooDeep { line:  1,
                                                      limit: MAX_DEPTH, })));

    let err = parse(&format!("x = 0\n< x{}", " - 1".repeat(MAX_DEPTH + 1))).unwrap_err();
    assert_eq!(err.to_string(),
               format!("Error on line 2: Program is nested too deeply (limit {MAX_DEPTH})."));
}
