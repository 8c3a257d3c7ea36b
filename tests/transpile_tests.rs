use dekhao_cpp::{
    parse, tokenize, transpile, DeclarationStatement, Error, PrintStatement, Statement, TypeTag,
};

// ============================================================================
// DECLARATIONS
// ============================================================================

#[test]
fn test_integer_declaration() {
    let tokens = tokenize("integer x te 5 + 3").unwrap();
    let stmts = parse(&tokens);
    assert_eq!(
        stmts,
        vec![Statement::Declaration(DeclarationStatement {
            ty: TypeTag::Integer,
            name: "x".to_string(),
            init: "5+3".to_string(),
            line: 1,
        })]
    );

    let cpp = transpile("integer x te 5 + 3").unwrap().to_string();
    assert!(cpp.contains("    int x = 5+3;\n"));
    assert!(!cpp.contains("#include <string>"));
}

#[test]
fn test_string_declaration_pulls_in_header() {
    let program = transpile("string s te \"abc\"").unwrap();
    assert!(program.features.text);
    assert_eq!(program.lines, vec!["std::string s = \"abc\";"]);

    let cpp = program.to_string();
    assert!(cpp.contains("#include <string>\n"));
    assert!(cpp.contains("std::string s = \"abc\";"));
}

#[test]
fn test_float_declaration_tracks_flag_only() {
    let program = transpile("float pi te 3").unwrap();
    assert!(program.features.floating);
    assert!(!program.features.text);
    assert_eq!(program.lines, vec!["float pi = 3;"]);
    assert!(!program.to_string().contains("#include <string>"));
}

#[test]
fn test_connector_is_optional() {
    let program = transpile("integer y 7").unwrap();
    assert_eq!(program.lines, vec!["int y = 7;"]);
}

// ============================================================================
// PRINT STATEMENTS
// ============================================================================

#[test]
fn test_print_string_and_variable() {
    let tokens = tokenize("dekhao(\"Hello\", x)").unwrap();
    assert_eq!(
        parse(&tokens),
        vec![Statement::Print(PrintStatement {
            args: vec!["\"Hello\"".to_string(), "x".to_string()],
            line: 1,
        })]
    );

    let cpp = transpile("dekhao(\"Hello\", x)").unwrap().to_string();
    assert!(cpp.contains("std::cout << \"Hello\" << x << std::endl;"));
}

#[test]
fn test_print_nested_parentheses() {
    let program = transpile("dekhao((a + b) * 2, f(x, y))").unwrap();
    assert_eq!(
        program.lines,
        vec!["std::cout << (a+b)*2 << f(x,y) << std::endl;"]
    );
}

#[test]
fn test_print_string_containing_comma() {
    let program = transpile("dekhao(\"a, b\", c)").unwrap();
    assert_eq!(program.lines, vec!["std::cout << \"a, b\" << c << std::endl;"]);
}

// ============================================================================
// SKIPPED LINES
// ============================================================================

#[test]
fn test_unrecognized_line_produces_nothing() {
    let tokens = tokenize("foo bar baz").unwrap();
    assert!(parse(&tokens).is_empty());

    let program = transpile("foo bar baz").unwrap();
    assert!(program.lines.is_empty());
    assert_eq!(
        program.to_string(),
        "#include <iostream>\nusing namespace std;\n\nint main() {\n    return 0;\n}\n"
    );
}

#[test]
fn test_malformed_lines_are_skipped_between_good_ones() {
    let source = "integer a te 1\ndekhao a\nstring\ndekhao(a";
    let program = transpile(source).unwrap();
    assert_eq!(program.lines, vec!["int a = 1;"]);
}

#[test]
fn test_blank_and_whitespace_lines() {
    let tokens = tokenize("   \n\t\n").unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| t.is_end_of_line()));
    assert!(parse(&tokens).is_empty());
}

// ============================================================================
// BOUNDARY CONDITIONS
// ============================================================================

#[test]
fn test_empty_input_is_no_input() {
    assert_eq!(transpile(""), Err(Error::NoInput));
    assert_eq!(tokenize(""), Err(Error::NoInput));
}

#[test]
fn test_pipeline_is_deterministic() {
    let source = std::fs::read_to_string("demos/mixed.dk").unwrap();
    let first = transpile(&source).unwrap().to_string();
    let second = transpile(&source).unwrap().to_string();
    assert_eq!(first, second);
}

#[test]
fn test_statement_order_follows_source() {
    let source = "dekhao(1)\nnoise here\ninteger a te 2\n\ndekhao(a)\nfloat b te a";
    let tokens = tokenize(source).unwrap();
    let lines: Vec<_> = parse(&tokens).iter().map(Statement::line).collect();
    assert_eq!(lines, vec![1, 3, 5, 6]);
    assert!(lines.windows(2).all(|w| w[0] <= w[1]));

    let program = transpile(source).unwrap();
    assert_eq!(
        program.lines,
        vec![
            "std::cout << 1 << std::endl;",
            "int a = 2;",
            "std::cout << a << std::endl;",
            "float b = a;",
        ]
    );
}

// ============================================================================
// DEMO PROGRAMS
// ============================================================================

#[test]
fn test_hello_demo() {
    let source = std::fs::read_to_string("demos/hello.dk").unwrap();
    let cpp = transpile(&source).unwrap().to_string();
    assert_eq!(
        cpp,
        "#include <iostream>\n\
         using namespace std;\n\
         \n\
         int main() {\n    \
         std::cout << \"Hello, world!\" << std::endl;\n    \
         return 0;\n\
         }\n"
    );
}

#[test]
fn test_arithmetic_demo() {
    let source = std::fs::read_to_string("demos/arithmetic.dk").unwrap();
    let program = transpile(&source).unwrap();
    assert_eq!(
        program.lines,
        vec![
            "int a = 10;",
            "int b = a*2+(3-1);",
            "float ratio = b/4;",
            "std::cout << \"a = \" << a << \", b = \" << b << std::endl;",
            "std::cout << \"ratio: \" << ratio << std::endl;",
        ]
    );
    assert!(program.features.floating);
    assert!(!program.features.text);
}

#[test]
fn test_mixed_demo() {
    let source = std::fs::read_to_string("demos/mixed.dk").unwrap();
    let program = transpile(&source).unwrap();
    assert_eq!(
        program.lines,
        vec![
            "std::string name = \"Rahim\";",
            "int age = 21;",
            "std::cout << \"Name: \" << name << std::endl;",
            "std::cout << \"Next year: \" << age+1 << std::endl;",
        ]
    );
    assert!(program.to_string().contains("#include <string>"));
}
