use std::fs;

use alpha::{
    ErrorKind, Outcome, SuppliedInputs,
    error::{Error, LexError, ParseError, RuntimeError},
    interpreter::parser::core::MAX_DEPTH,
    run,
};
use walkdir::WalkDir;

#[test]
fn program_fixtures_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "alpha"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Missing expectation {expected_path:?}: {e}")
                                                         });
        let expected: Vec<&str> = expected.lines().collect();

        count += 1;
        match run(&source, &mut SuppliedInputs::new()) {
            Outcome::Completed { output } => {
                assert_eq!(output, expected, "Program {path:?} printed the wrong output");
            },
            other => panic!("Program {path:?} did not complete:\n{source}\nOutcome: {other:?}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn assert_output(src: &str, expected: &[&str]) {
    match run(src, &mut SuppliedInputs::new()) {
        Outcome::Completed { output } => assert_eq!(output, expected, "Script: {src}"),
        other => panic!("Script failed: {src}\nOutcome: {other:?}"),
    }
}

fn failure(src: &str) -> (Error, Vec<String>) {
    match run(src, &mut SuppliedInputs::new()) {
        Outcome::Failed { error, output } => (error, output),
        other => panic!("Script succeeded but was expected to fail: {src}\nOutcome: {other:?}"),
    }
}

#[test]
fn assignment_and_print() {
    assert_output("x = 5\n< x", &["5"]);
}

#[test]
fn print_of_an_expression() {
    assert_output("x = 10\ny = 3\n< x - y", &["7"]);
}

#[test]
fn loop_counts_up() {
    assert_output("i = 0\nwhile i != 3\n< i\ni = i + 1\nend", &["0", "1", "2"]);
}

#[test]
fn division_by_zero_is_error() {
    let (error, _) = failure("x = 1 / 0");
    assert_eq!(error.kind(), ErrorKind::Runtime);
    assert!(matches!(error, Error::Runtime(RuntimeError::DivisionByZero { line: 1 })));
    assert!(error.to_string().contains("division by zero"));
}

#[test]
fn unknown_variable_is_error() {
    let (error, _) = failure("< z");
    assert_eq!(error.kind(), ErrorKind::Runtime);
    assert!(error.to_string().contains("'z' not defined"));
}

#[test]
fn unknown_variable_is_never_defaulted() {
    let (error, _) = failure("x = y + 1");
    assert!(matches!(error, Error::Runtime(RuntimeError::UndefinedVariable { ref name, line: 1 }) if name == "y"));

    let (error, _) = failure("while q == 0\nend");
    assert!(matches!(error, Error::Runtime(RuntimeError::UndefinedVariable { ref name, .. }) if name == "q"));
}

#[test]
fn division_truncates_toward_negative_infinity() {
    assert_output("a = 0 - 7\n< a / 2", &["-4"]);
    assert_output("a = 0 - 8\n< a / 2", &["-4"]);
    assert_output("a = 0 - 1\n< a / 3", &["-1"]);
    assert_output("< 7 / 2", &["3"]);
}

#[test]
fn precedence_and_associativity() {
    assert_output("< 2 + 3 * 4", &["14"]);
    assert_output("< 10 - 3 - 2", &["5"]);
    assert_output("< 20 / 2 / 5", &["2"]);
    assert_output("< 7 - 8 / 3", &["5"]);
    assert_output("< 2 * 3 + 4 * 5", &["26"]);
}

#[test]
fn assignment_overwrites() {
    assert_output("x = 1\nx = x + 41\n< x", &["42"]);
}

#[test]
fn nested_loops() {
    let source = "i = 0\nwhile i != 2\nj = 0\nwhile j != 2\n< i * 10 + j\nj = j + 1\nend\ni = i + 1\nend";
    assert_output(source, &["0", "1", "10", "11"]);
}

#[test]
fn equality_condition() {
    assert_output("x = 3\nwhile x == 3\n< x\nx = 4\nend\n< x", &["3", "4"]);
}

#[test]
fn keywords_only_match_whole_words() {
    assert_output("whilex = 2\nend1 = 3\n< whilex + end1", &["5"]);
}

#[test]
fn statements_need_no_newlines() {
    assert_output("x = 1 y = 2 < x + y", &["3"]);
}

#[test]
fn leading_zeros_are_allowed() {
    assert_output("< 007", &["7"]);
}

#[test]
fn stray_end_at_top_level_is_ignored() {
    assert_output("x = 1\nend\n< x", &["1"]);
}

#[test]
fn semicolon_ends_the_program() {
    assert_output("< 1; < 2", &["1"]);
    assert_output("< 1;\n$ ! @", &["1"]);
}

#[test]
fn empty_program_completes_without_output() {
    assert_output("", &[]);
    assert_output("   \n\t\n", &[]);
}

#[test]
fn overflow_is_error() {
    let (error, _) = failure("x = 9223372036854775807\nx = x + 1");
    assert!(matches!(error, Error::Runtime(RuntimeError::Overflow { line: 2 })));

    let (error, _) = failure("m = 0 - 9223372036854775807 - 1\nn = 0 - 1\n< m / n");
    assert!(matches!(error, Error::Runtime(RuntimeError::Overflow { line: 3 })));

    let (error, _) = failure("x = 9223372036854775808");
    assert!(matches!(error, Error::Lex(LexError::LiteralTooLarge { line: 1, .. })));
}

#[test]
fn failure_keeps_output_printed_so_far() {
    let (error, output) = failure("< 1\n< 2\n< nope\n< 3");
    assert_eq!(error.kind(), ErrorKind::Runtime);
    assert_eq!(output, ["1", "2"]);
}

#[test]
fn lone_bang_is_lex_error() {
    let (error, output) = failure("x = 1\n< x\ny = !x");
    assert!(output.is_empty());
    assert_eq!(error,
               Error::Lex(LexError::UnexpectedCharacter { character: '!',
                                                          line:      3,
                                                          column:    5, }));
}

#[test]
fn unknown_character_is_lex_error() {
    let (error, _) = failure("x = 1 % 2");
    assert!(matches!(error, Error::Lex(LexError::UnexpectedCharacter { character: '%', .. })));

    let (error, _) = failure("x = (1)");
    assert!(matches!(error, Error::Lex(LexError::UnexpectedCharacter { character: '(', .. })));
}

#[test]
fn relational_operators_are_not_conditions() {
    let (error, _) = failure("x = 1\nwhile x < 3\nend");
    assert!(matches!(error, Error::Parse(ParseError::InvalidCondition { line: 2, .. })));
}

#[test]
fn unterminated_loop_is_parse_error() {
    let (error, _) = failure("i = 0\nwhile i != 3\ni = i + 1\n");
    assert_eq!(error, Error::Parse(ParseError::UnterminatedLoop { line: 2 }));

    let (error, _) = failure("while 1 == 1\nwhile 2 == 2\nend");
    assert_eq!(error, Error::Parse(ParseError::UnterminatedLoop { line: 1 }));
}

#[test]
fn parse_errors_happen_before_any_output() {
    let (error, output) = failure("< 1\nx 5");
    assert_eq!(error.kind(), ErrorKind::Parse);
    assert!(output.is_empty());
    assert!(error.to_string().contains("Expected ASSIGN, got NUMBER"));
}

#[test]
fn runs_are_deterministic() {
    let source = "a = 3\nwhile a != 0\n< a * a - a / 2\na = a - 1\nend";
    let first = run(source, &mut SuppliedInputs::new());
    let second = run(source, &mut SuppliedInputs::new());
    assert_eq!(first, second);
    assert!(matches!(first, Outcome::Completed { .. }));
}

#[test]
fn unicode_identifiers_and_spaces() {
    assert_output("größe = 2\nπ1 = größe * 3\n< π1", &["6"]);
    assert_output("x\u{a0}=\u{a0}5\n< x", &["5"]);

    let (error, _) = failure("x = 1\ny = é");
    assert!(matches!(error, Error::Runtime(RuntimeError::UndefinedVariable { ref name, line: 2 }) if name == "é"));
}

#[test]
fn deep_programs_fail_instead_of_crashing() {
    let (error, output) = failure(&format!("x = 1{}\n< x", " + 1".repeat(10_000)));
    assert_eq!(error.kind(), ErrorKind::Parse);
    assert!(output.is_empty());

    let loops = format!("x = 1\n{}{}", "while x == 1\n".repeat(10_000), "end\n".repeat(10_000));
    let (error, _) = failure(&loops);
    assert!(matches!(error, Error::Parse(ParseError::TooDeep { line: 258, .. })));
}

#[test]
fn programs_at_the_nesting_limit_still_run() {
    assert_output(&format!("x = 0{}\n< x", " + 1".repeat(MAX_DEPTH)), &["256"]);

    let source = format!("i = 0\n{}i = 1\n{}< i",
                         "while i == 0\n".repeat(MAX_DEPTH),
                         "end\n".repeat(MAX_DEPTH));
    assert_output(&source, &["1"]);
}
